use crate::config::Config;

/// Renders a result with `config.precision` fractional digits, using the
/// configured decimal separator.
///
/// Non-finite values have fixed spellings: `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use calcup::{
///     config::{Config, DecimalSeparator},
///     util::format::format_value,
/// };
///
/// let config = Config::default();
/// assert_eq!(format_value(5.0, &config), "5.000000");
/// assert_eq!(format_value(f64::INFINITY, &config), "inf");
///
/// let config = config.with_separator(DecimalSeparator::Comma).with_precision(2);
/// assert_eq!(format_value(-1.5, &config), "-1,50");
/// ```
#[must_use]
pub fn format_value(value: f64, config: &Config) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}inf");
    }

    let precision = config.precision;
    let text = format!("{value:.precision$}");
    match config.decimal_separator.as_char() {
        '.' => text,
        separator => text.replace('.', &separator.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecimalSeparator;

    #[test]
    fn fixed_precision() {
        let config = Config::default();
        assert_eq!(format_value(0.1 + 0.2, &config), "0.300000");
        assert_eq!(format_value(-7.0, &config), "-7.000000");
        assert_eq!(format_value(512.0, &config.with_precision(0)), "512");
    }

    #[test]
    fn comma_separator() {
        let config = Config::default().with_separator(DecimalSeparator::Comma);
        assert_eq!(format_value(2.5, &config), "2,500000");
    }

    #[test]
    fn non_finite() {
        let config = Config::default();
        assert_eq!(format_value(f64::NEG_INFINITY, &config), "-inf");
        assert_eq!(format_value(f64::NAN, &config), "nan");
    }
}
