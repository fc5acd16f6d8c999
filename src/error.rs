use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unknown category \"{input}\" (expected Length, Weight, Temperature or Currency)")]
    UnknownCategory { input: String },

    #[error("Unit \"{unit}\" is not supported in {category}")]
    UnsupportedUnit { category: String, unit: String },

    #[error("No exchange rate for currency \"{code}\"")]
    UnknownCurrency { code: String },

    #[error("Invalid Input")]
    InvalidInput { input: String },

    #[error("Invalid rate {rate} for currency \"{code}\"")]
    InvalidRate { code: String, rate: f64 },

    #[error("Console I/O failed: {0}")]
    Console(#[source] std::io::Error),

    #[error("History file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// The compiled-in tables disagree with each other. Unlike unknown
    /// categories or units, no user input can cause these.
    pub(crate) fn is_consistency_fault(&self) -> bool {
        matches!(
            self,
            AppError::UnknownCurrency { .. } | AppError::InvalidRate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_category() {
        let e = AppError::UnknownCategory {
            input: "Volume".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown category "Volume" (expected Length, Weight, Temperature or Currency)"#
        );
    }

    #[test]
    fn app_error_display_unit() {
        let e = AppError::UnsupportedUnit {
            category: "Length".to_string(),
            unit: "Grams".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unit "Grams" is not supported in Length"#
        );
    }

    #[test]
    fn app_error_display_invalid_input() {
        let e = AppError::InvalidInput {
            input: "abc".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid Input");
    }

    #[test]
    fn app_error_display_io() {
        let e = AppError::io(
            "/tmp/history.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(e.to_string(), "History file /tmp/history.txt: denied");
    }

    #[test]
    fn consistency_faults() {
        assert!(AppError::UnknownCurrency { code: "JPY".into() }.is_consistency_fault());
        assert!(!AppError::InvalidInput { input: "x".into() }.is_consistency_fault());
        assert!(
            !AppError::UnsupportedUnit {
                category: "Length".into(),
                unit: "Grams".into()
            }
            .is_consistency_fault()
        );
        assert!(
            !AppError::io("h.txt", std::io::Error::other("boom")).is_consistency_fault()
        );
    }
}
