use clap::ValueEnum;

/// Default number of fractional digits printed for a result.
pub const DEFAULT_PRECISION: usize = 6;

/// Environment variables consulted, in order, when detecting the locale.
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Language codes of locales that write a comma as the decimal separator.
const COMMA_LANGUAGES: &[&str] = &["az", "be", "bg", "bs", "ca", "cs", "da", "de", "el", "es",
                                   "et", "eu", "fi", "fo", "fr", "gl", "hr", "hu", "hy", "id",
                                   "is", "it", "ka", "kk", "ky", "lt", "lv", "mk", "mn", "nb",
                                   "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sq",
                                   "sr", "sv", "tr", "uk", "uz", "vi"];

/// The character that separates the integer and fractional part of a number.
///
/// Number literals are only recognized with the configured separator. The
/// other character is not part of the language and is rejected by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecimalSeparator {
    /// `.`, as in `3.14`.
    #[default]
    Point,
    /// `,`, as in `3,14`.
    Comma,
}

impl DecimalSeparator {
    /// Returns the separator as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Point => '.',
            Self::Comma => ',',
        }
    }

    /// Maps a POSIX locale name to the separator it uses for numbers.
    ///
    /// Only the language part of the name matters: `ru_RU.UTF-8`, `ru_RU`
    /// and `ru` all map to [`DecimalSeparator::Comma`]. `C`, `POSIX` and
    /// unknown languages map to [`DecimalSeparator::Point`].
    ///
    /// # Example
    /// ```
    /// use calcup::config::DecimalSeparator;
    ///
    /// assert_eq!(DecimalSeparator::from_locale("de_DE.UTF-8"),
    ///            DecimalSeparator::Comma);
    /// assert_eq!(DecimalSeparator::from_locale("en_US.UTF-8"),
    ///            DecimalSeparator::Point);
    /// assert_eq!(DecimalSeparator::from_locale("C"), DecimalSeparator::Point);
    /// ```
    #[must_use]
    pub fn from_locale(name: &str) -> Self {
        let language = name.split(['_', '.', '@', '-'])
                           .next()
                           .unwrap_or_default()
                           .to_ascii_lowercase();
        if COMMA_LANGUAGES.contains(&language.as_str()) {
            Self::Comma
        } else {
            Self::Point
        }
    }

    /// Detects the separator from the locale environment variables.
    ///
    /// The first variable in [`LOCALE_VARIABLES`] that is set and non-empty
    /// decides, the same precedence the C library uses for `LC_NUMERIC`.
    #[must_use]
    pub fn from_env() -> Self {
        LOCALE_VARIABLES.iter()
                        .filter_map(|var| std::env::var(var).ok())
                        .find(|value| !value.is_empty())
                        .map_or_else(Self::default, |name| Self::from_locale(&name))
    }
}

/// Settings for one evaluation and for printing its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Separator recognized inside number literals and used when printing.
    pub decimal_separator: DecimalSeparator,
    /// Fractional digits printed for a finite result.
    pub precision:         usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { decimal_separator: DecimalSeparator::default(),
               precision:         DEFAULT_PRECISION, }
    }
}

impl Config {
    /// Returns a copy of `self` using the given separator.
    #[must_use]
    pub const fn with_separator(mut self, decimal_separator: DecimalSeparator) -> Self {
        self.decimal_separator = decimal_separator;
        self
    }

    /// Returns a copy of `self` printing `precision` fractional digits.
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
