use serde::Serialize;
use std::fmt;
use std::iter;

/// Fixed-point text with `places` decimals, rounded half-up (away from zero)
/// from the shortest decimal representation of `value`.
///
/// `{:.N}` rounds the exact binary value instead, so a typed `1.005` (stored
/// as 1.00499999...) would come out as `1.00` rather than `1.01`.
pub(crate) fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.places$}");
    }

    // Display never switches to exponent notation
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// One completed conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HistoryEntry {
    pub(crate) input: f64,
    pub(crate) from_unit: String,
    pub(crate) result: f64,
    pub(crate) to_unit: String,
}

impl HistoryEntry {
    pub(crate) fn new(input: f64, from_unit: &str, result: f64, to_unit: &str) -> Self {
        Self {
            input,
            from_unit: from_unit.to_string(),
            result,
            to_unit: to_unit.to_string(),
        }
    }

    /// Persisted form, without the line terminator
    pub(crate) fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            format_fixed(self.input, 2),
            self.from_unit,
            format_fixed(self.result, 4),
            self.to_unit
        )
    }
}
