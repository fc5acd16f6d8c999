/// History file used when neither the CLI nor the config names one
pub(crate) const DEFAULT_HISTORY_FILE: &str = "conversion_history.txt";

/// Display-only heading shown above history lines; never written to the log
pub(crate) const HISTORY_BANNER: &str = "Conversion History:";

/// Result field text when the entered value is not a number
pub(crate) const INVALID_INPUT: &str = "Invalid Input";
