use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{config::Config, error::EvalError, evaluate_with, util::format::format_value};

/// Printed before each line of input.
pub const PROMPT: &str = "Enter expression: ";
/// Input line that ends the session.
pub const EXIT_COMMAND: &str = "exit";
/// Printed for any lexing or parsing failure.
pub const ERROR_MESSAGE: &str = "Error in expression";

/// Runs the read-eval-print loop until `exit` or the end of `input`.
///
/// Each line is evaluated on its own; nothing carries over between lines.
/// Failures print [`ERROR_MESSAGE`] and the loop continues. The detailed
/// error is logged at `debug` level.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use calcup::{config::Config, repl::run};
///
/// let mut output = Vec::new();
/// run("2+3\n2+\nexit\n".as_bytes(), &mut output, &Config::default()).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Result: 5.000000"));
/// assert!(output.contains("Error in expression"));
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, config: &Config) -> io::Result<()> {
    info!("starting session with {config:?}");
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let expression = line.trim_end_matches(['\n', '\r']);
        if expression == EXIT_COMMAND {
            break;
        }
        writeln!(output, "{}", respond(expression, config))?;
    }

    info!("session finished");
    Ok(())
}

/// Evaluates one line and returns the text the prompt prints for it.
///
/// # Example
/// ```
/// use calcup::{config::Config, repl::respond};
///
/// assert_eq!(respond("(2+3)*4", &Config::default()), "Result: 20.000000");
/// assert_eq!(respond("2 3", &Config::default()), "Error in expression");
/// ```
#[must_use]
pub fn respond(expression: &str, config: &Config) -> String {
    render(&evaluate_with(expression, config), config)
}

/// Turns an evaluation outcome into the line printed for it.
///
/// Every failure prints [`ERROR_MESSAGE`]; the detailed error only goes to
/// the `debug` log. The prompt and the one-shot command line share this so
/// both print the same text for the same input.
///
/// # Example
/// ```
/// use calcup::{config::Config, evaluate, repl::render};
///
/// assert_eq!(render(&evaluate("1/4"), &Config::default().with_precision(2)),
///            "Result: 0.25");
/// assert_eq!(render(&evaluate("(1"), &Config::default()), "Error in expression");
/// ```
#[must_use]
pub fn render(result: &Result<f64, EvalError>, config: &Config) -> String {
    match result {
        Ok(value) => format!("Result: {}", format_value(*value, config)),
        Err(e) => {
            debug!("rejected expression: {e}");
            ERROR_MESSAGE.to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecimalSeparator;

    fn session(input: &str, config: &Config) -> String {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn stops_at_exit() {
        let output = session("1+1\nexit\n3+3\n", &Config::default());
        assert_eq!(output,
                   format!("{PROMPT}Result: 2.000000\n{PROMPT}"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let output = session("1/0", &Config::default());
        assert_eq!(output, format!("{PROMPT}Result: inf\n{PROMPT}\n"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let output = session("2+\n(1\n4*2\n", &Config::default());
        assert_eq!(output,
                   format!("{PROMPT}{ERROR_MESSAGE}\n{PROMPT}{ERROR_MESSAGE}\n{PROMPT}Result: \
                            8.000000\n{PROMPT}\n"));
    }

    #[test]
    fn crlf_line_endings() {
        let output = session("2*3\r\nexit\r\n", &Config::default());
        assert_eq!(output, format!("{PROMPT}Result: 6.000000\n{PROMPT}"));
    }

    #[test]
    fn comma_locale() {
        let config = Config::default().with_separator(DecimalSeparator::Comma);
        assert_eq!(respond("1,5*2", &config), "Result: 3,000000");
        assert_eq!(respond("1.5*2", &config), ERROR_MESSAGE);
    }

    #[test]
    fn render_hides_the_error_detail() {
        let config = Config::default();
        let nested = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(render(&crate::evaluate(&nested), &config), ERROR_MESSAGE);
        assert_eq!(render(&crate::evaluate("2 $"), &config), ERROR_MESSAGE);
        assert_eq!(render(&Ok(f64::NAN), &config), "Result: nan");
    }

    #[test]
    fn exit_must_match_exactly() {
        assert_eq!(respond(" exit", &Config::default()), ERROR_MESSAGE);
    }
}
