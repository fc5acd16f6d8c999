//! Static currency rate table
//!
//! Rates are units of a currency per one unit of the base currency.

use serde::Serialize;

use crate::error::AppError;

pub(crate) const BASE_CURRENCY: &str = "USD";

const STANDARD_RATES: &[(&str, f64)] = &[
    ("INR", 83.0),
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.78),
];

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RateEntry {
    pub(crate) code: String,
    pub(crate) rate: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct RateTable {
    base: String,
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Build a table, rejecting non-positive rates and a base not at 1.0
    pub(crate) fn new(base: &str, rates: &[(&str, f64)]) -> Result<Self, AppError> {
        let mut entries: Vec<RateEntry> = Vec::with_capacity(rates.len());
        for &(code, rate) in rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(AppError::InvalidRate {
                    code: code.to_string(),
                    rate,
                });
            }
            if code == base && rate != 1.0 {
                return Err(AppError::InvalidRate {
                    code: code.to_string(),
                    rate,
                });
            }
            match entries.iter_mut().find(|e| e.code == code) {
                Some(existing) => existing.rate = rate,
                None => entries.push(RateEntry {
                    code: code.to_string(),
                    rate,
                }),
            }
        }
        if !entries.iter().any(|e| e.code == base) {
            entries.insert(
                0,
                RateEntry {
                    code: base.to_string(),
                    rate: 1.0,
                },
            );
        }
        Ok(Self {
            base: base.to_string(),
            entries,
        })
    }

    pub(crate) fn standard() -> Result<Self, AppError> {
        Self::new(BASE_CURRENCY, STANDARD_RATES)
    }

    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn rate(&self, code: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.code == code).map(|e| e.rate)
    }

    pub(crate) fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Codes from `codes` that have no rate
    pub(crate) fn missing<'a>(&self, codes: &[&'a str]) -> Vec<&'a str> {
        codes
            .iter()
            .copied()
            .filter(|c| self.rate(c).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates() {
        let table = RateTable::standard().unwrap();
        assert_eq!(table.base(), "USD");
        assert_eq!(table.rate("USD"), Some(1.0));
        assert_eq!(table.rate("INR"), Some(83.0));
        assert_eq!(table.rate("EUR"), Some(0.92));
        assert_eq!(table.rate("GBP"), Some(0.78));
        assert_eq!(table.rate("JPY"), None);
    }

    #[test]
    fn test_entries_keep_order() {
        let table = RateTable::standard().unwrap();
        let codes: Vec<_> = table.entries().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["INR", "USD", "EUR", "GBP"]);
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let err = RateTable::new("USD", &[("USD", 1.0), ("EUR", 0.0)]).unwrap_err();
        assert!(matches!(err, AppError::InvalidRate { code, .. } if code == "EUR"));
        assert!(RateTable::new("USD", &[("EUR", -2.0)]).is_err());
        assert!(RateTable::new("USD", &[("EUR", f64::NAN)]).is_err());
    }

    #[test]
    fn test_rejects_base_not_one() {
        assert!(RateTable::new("USD", &[("USD", 1.1)]).is_err());
    }

    #[test]
    fn test_base_added_when_absent() {
        let table = RateTable::new("EUR", &[("USD", 1.09)]).unwrap();
        assert_eq!(table.rate("EUR"), Some(1.0));
        assert_eq!(table.entries()[0].code, "EUR");
    }

    #[test]
    fn test_missing_codes() {
        let table = RateTable::standard().unwrap();
        assert!(table.missing(&["INR", "USD", "EUR", "GBP"]).is_empty());
        assert_eq!(table.missing(&["USD", "JPY"]), ["JPY"]);
    }
}
