/// Result formatting helpers.
///
/// This module renders evaluation results the way the interactive prompt
/// prints them: a fixed number of fractional digits and the configured
/// decimal separator.
pub mod format;
