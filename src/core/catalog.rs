//! Unit catalog
//!
//! Fixed set of categories and the ordered unit names valid in each.

use serde::Serialize;
use std::fmt;

use crate::error::AppError;

/// A domain of convertible quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub(crate) enum Category {
    Length,
    Weight,
    Temperature,
    Currency,
}

impl Category {
    /// Catalog order, also the order categories are offered in the form
    pub(crate) const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Currency,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Currency => "Currency",
        }
    }

    /// Parse a category name, ignoring case
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::UnknownCategory {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const LENGTH_UNITS: &[&str] = &["Kilometers", "Miles", "Meters", "Feet"];
const WEIGHT_UNITS: &[&str] = &["Kilograms", "Pounds", "Grams", "Ounces"];
const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];
const CURRENCY_UNITS: &[&str] = &["INR", "USD", "EUR", "GBP"];

/// Read-only mapping from category to its ordered units
#[derive(Debug, Clone)]
pub(crate) struct UnitCatalog {
    entries: Vec<(Category, &'static [&'static str])>,
}

impl UnitCatalog {
    pub(crate) fn standard() -> Self {
        Self {
            entries: Category::ALL
                .into_iter()
                .map(|c| {
                    let units = match c {
                        Category::Length => LENGTH_UNITS,
                        Category::Weight => WEIGHT_UNITS,
                        Category::Temperature => TEMPERATURE_UNITS,
                        Category::Currency => CURRENCY_UNITS,
                    };
                    (c, units)
                })
                .collect(),
        }
    }

    pub(crate) fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Units of a category, in display order
    pub(crate) fn units(&self, category: Category) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, units)| *units)
            .unwrap_or(&[])
    }

    /// Look up a category by name, returning it with its units
    pub(crate) fn units_for(
        &self,
        name: &str,
    ) -> Result<(Category, &'static [&'static str]), AppError> {
        let category = Category::parse(name)?;
        Ok((category, self.units(category)))
    }

    pub(crate) fn contains(&self, category: Category, unit: &str) -> bool {
        self.units(category).contains(&unit)
    }

    /// First category that lists `unit`, ignoring case. Unit names are
    /// unique across the standard catalog, so this is unambiguous there.
    pub(crate) fn category_of(&self, unit: &str) -> Option<Category> {
        self.categories()
            .find(|c| self.canonical_unit(*c, unit).is_some())
    }

    /// Resolve a unit name case-insensitively to its canonical spelling
    pub(crate) fn canonical_unit(&self, category: Category, unit: &str) -> Option<&'static str> {
        let trimmed = unit.trim();
        self.units(category)
            .iter()
            .copied()
            .find(|u| u.eq_ignore_ascii_case(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_for_known_categories() {
        let catalog = UnitCatalog::standard();
        let units = |name| catalog.units_for(name).unwrap().1;
        assert_eq!(units("Length"), &["Kilometers", "Miles", "Meters", "Feet"]);
        assert_eq!(units("Weight"), &["Kilograms", "Pounds", "Grams", "Ounces"]);
        assert_eq!(units("Temperature"), &["Celsius", "Fahrenheit", "Kelvin"]);
        assert_eq!(units("Currency"), &["INR", "USD", "EUR", "GBP"]);
    }

    #[test]
    fn test_units_for_is_case_insensitive() {
        let catalog = UnitCatalog::standard();
        let (category, units) = catalog.units_for("currency").unwrap();
        assert_eq!(category, Category::Currency);
        assert_eq!(units.len(), 4);
        let (category, units) = catalog.units_for(" TEMPERATURE ").unwrap();
        assert_eq!(category, Category::Temperature);
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn test_units_for_unknown_category() {
        let catalog = UnitCatalog::standard();
        let err = catalog.units_for("Volume").unwrap_err();
        assert!(matches!(err, AppError::UnknownCategory { input } if input == "Volume"));
    }

    #[test]
    fn test_categories_in_catalog_order() {
        let catalog = UnitCatalog::standard();
        let names: Vec<_> = catalog.categories().map(Category::name).collect();
        assert_eq!(names, ["Length", "Weight", "Temperature", "Currency"]);
    }

    #[test]
    fn test_every_category_non_empty_and_unique() {
        let catalog = UnitCatalog::standard();
        for category in catalog.categories() {
            let units = catalog.units(category);
            assert!(!units.is_empty(), "{category} has no units");
            for (i, unit) in units.iter().enumerate() {
                assert!(!units[i + 1..].contains(unit), "{unit} repeated in {category}");
            }
        }
    }

    #[test]
    fn test_category_of() {
        let catalog = UnitCatalog::standard();
        assert_eq!(catalog.category_of("Miles"), Some(Category::Length));
        assert_eq!(catalog.category_of("Ounces"), Some(Category::Weight));
        assert_eq!(catalog.category_of("Kelvin"), Some(Category::Temperature));
        assert_eq!(catalog.category_of("EUR"), Some(Category::Currency));
        assert_eq!(catalog.category_of("eur"), Some(Category::Currency));
        assert_eq!(catalog.category_of("Parsecs"), None);
    }

    #[test]
    fn test_canonical_unit() {
        let catalog = UnitCatalog::standard();
        assert_eq!(catalog.canonical_unit(Category::Currency, "usd"), Some("USD"));
        assert_eq!(catalog.canonical_unit(Category::Length, "feet"), Some("Feet"));
        assert_eq!(catalog.canonical_unit(Category::Length, "Grams"), None);
    }
}
