use std::io;

use calcup::{
    config::{Config, DecimalSeparator},
    evaluate_with, repl,
};
use clap::Parser;

/// calcup evaluates arithmetic expressions with `+ - * / ^`, parentheses and
/// the natural logarithm `log`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Decimal separator for number literals and results. Detected from
    /// LC_ALL, LC_NUMERIC or LANG when not given.
    #[arg(short, long, value_enum, env = "CALCUP_DECIMAL_SEPARATOR")]
    decimal_separator: Option<DecimalSeparator>,

    /// Number of fractional digits printed for each result.
    #[arg(short, long, default_value_t = calcup::config::DEFAULT_PRECISION)]
    precision: usize,

    /// Expression to evaluate once. Starts the interactive prompt when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config =
        Config::default().with_separator(args.decimal_separator
                                             .unwrap_or_else(DecimalSeparator::from_env))
                         .with_precision(args.precision);

    if let Some(expression) = args.expression {
        let result = evaluate_with(&expression, &config);
        println!("{}", repl::render(&result, &config));
        if result.is_err() {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl::run(io::stdin().lock(), io::stdout().lock(), &config) {
        eprintln!("Failed to run the prompt: {e}");
        std::process::exit(1);
    }
}
