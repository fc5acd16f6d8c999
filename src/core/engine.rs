//! Conversion engine
//!
//! Every category converts in two stages: the source value is normalized to
//! the category's base unit, then denormalized into the destination unit.

use crate::core::catalog::{Category, UnitCatalog};
use crate::core::rates::RateTable;
use crate::error::AppError;

/// Multipliers to meters
const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("Kilometers", 1000.0),
    ("Miles", 1609.34),
    ("Meters", 1.0),
    ("Feet", 0.3048),
];

/// Multipliers to grams
const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("Kilograms", 1000.0),
    ("Pounds", 453.592),
    ("Grams", 1.0),
    ("Ounces", 28.3495),
];

const KELVIN_OFFSET: f64 = 273.15;

/// How a category reaches its base unit
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// base = value * factor
    Linear(&'static [(&'static str, f64)]),
    /// Affine formulas through Celsius
    Temperature,
    /// Through the rate table's base currency
    Currency,
}

impl Strategy {
    fn for_category(category: Category) -> Self {
        match category {
            Category::Length => Strategy::Linear(LENGTH_FACTORS),
            Category::Weight => Strategy::Linear(WEIGHT_FACTORS),
            Category::Temperature => Strategy::Temperature,
            Category::Currency => Strategy::Currency,
        }
    }
}

/// Unlisted units pass through unscaled
fn linear_factor(factors: &[(&str, f64)], unit: &str) -> f64 {
    factors
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, f)| *f)
        .unwrap_or(1.0)
}

fn celsius_from(unit: &str, value: f64) -> f64 {
    match unit {
        "Fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "Kelvin" => value - KELVIN_OFFSET,
        _ => value,
    }
}

fn celsius_to(unit: &str, celsius: f64) -> f64 {
    match unit {
        "Fahrenheit" => (celsius * 9.0 / 5.0) + 32.0,
        "Kelvin" => celsius + KELVIN_OFFSET,
        _ => celsius,
    }
}

/// Pure converter over borrowed, immutable tables
#[derive(Debug, Clone, Copy)]
pub(crate) struct Converter<'a> {
    catalog: &'a UnitCatalog,
    rates: &'a RateTable,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(catalog: &'a UnitCatalog, rates: &'a RateTable) -> Self {
        Self { catalog, rates }
    }

    pub(crate) fn catalog(&self) -> &'a UnitCatalog {
        self.catalog
    }

    /// Convert `value` from one unit to another within `category`.
    ///
    /// Identical units return the input untouched without running any
    /// formula, so no floating-point round trip is introduced.
    pub(crate) fn convert(
        &self,
        category: Category,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, AppError> {
        self.check_unit(category, from)?;
        self.check_unit(category, to)?;

        if from == to {
            return Ok(value);
        }

        let strategy = Strategy::for_category(category);
        let base = self.to_base(strategy, from, value)?;
        let result = self.from_base(strategy, to, base)?;
        log::debug!("{category}: {value} {from} -> {base} (base) -> {result} {to}");
        Ok(result)
    }

    fn check_unit(&self, category: Category, unit: &str) -> Result<(), AppError> {
        if self.catalog.contains(category, unit) {
            Ok(())
        } else {
            Err(AppError::UnsupportedUnit {
                category: category.name().to_string(),
                unit: unit.to_string(),
            })
        }
    }

    fn to_base(&self, strategy: Strategy, unit: &str, value: f64) -> Result<f64, AppError> {
        Ok(match strategy {
            Strategy::Linear(factors) => value * linear_factor(factors, unit),
            Strategy::Temperature => celsius_from(unit, value),
            Strategy::Currency => value / self.currency_rate(unit)?,
        })
    }

    fn from_base(&self, strategy: Strategy, unit: &str, base: f64) -> Result<f64, AppError> {
        Ok(match strategy {
            Strategy::Linear(factors) => base / linear_factor(factors, unit),
            Strategy::Temperature => celsius_to(unit, base),
            Strategy::Currency => base * self.currency_rate(unit)?,
        })
    }

    fn currency_rate(&self, code: &str) -> Result<f64, AppError> {
        self.rates
            .rate(code)
            .ok_or_else(|| AppError::UnknownCurrency {
                code: code.to_string(),
            })
    }
}
