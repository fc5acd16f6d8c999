//! Interaction controller
//!
//! Holds the form state (selected category and units, result field, history
//! pane) and exposes one handler per user action. Front ends only call these
//! handlers and render the state; they never touch the engine or the log
//! directly.

use crate::consts::INVALID_INPUT;
use crate::core::{Category, Converter};
use crate::error::AppError;
use crate::history::{HistoryEntry, HistoryLog, format_fixed};
use crate::output::render_history;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitSide {
    From,
    To,
}

#[derive(Debug, Clone)]
pub(crate) struct FormState {
    pub(crate) category: Category,
    pub(crate) units: &'static [&'static str],
    pub(crate) from_unit: &'static str,
    pub(crate) to_unit: &'static str,
    pub(crate) result: String,
    pub(crate) history: Vec<String>,
}

#[derive(Debug)]
pub(crate) enum ConvertOutcome {
    Converted {
        entry: HistoryEntry,
        /// Set when the entry was shown but could not be written to the log
        persist_error: Option<AppError>,
    },
    InvalidInput,
}

/// Parse user text as a number. Surrounding whitespace is ignored; NaN and
/// infinities are rejected.
pub(crate) fn parse_value(text: &str) -> Result<f64, AppError> {
    let invalid = || AppError::InvalidInput {
        input: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

pub(crate) struct Controller<'a> {
    converter: Converter<'a>,
    history: &'a HistoryLog,
    state: FormState,
}

impl<'a> Controller<'a> {
    /// Select the first catalog category and load the existing log into the
    /// history pane. A failed load leaves the pane empty and is returned
    /// alongside the controller.
    pub(crate) fn open(
        converter: Converter<'a>,
        history: &'a HistoryLog,
    ) -> (Self, Option<AppError>) {
        let catalog = converter.catalog();
        let category = catalog.categories().next().unwrap_or(Category::Length);
        let units = catalog.units(category);
        let first = units.first().copied().unwrap_or_default();

        let (lines, load_error) = match history.read_lines() {
            Ok(lines) => (lines, None),
            Err(e) => {
                log::warn!("Could not load history: {e}");
                (Vec::new(), Some(e))
            }
        };

        let controller = Self {
            converter,
            history,
            state: FormState {
                category,
                units,
                from_unit: first,
                to_unit: first,
                result: String::new(),
                history: lines,
            },
        };
        (controller, load_error)
    }

    pub(crate) fn state(&self) -> &FormState {
        &self.state
    }

    pub(crate) fn history_log(&self) -> &HistoryLog {
        self.history
    }

    /// History pane text: the banner followed by one line per entry
    pub(crate) fn history_pane(&self) -> String {
        render_history(&self.state.history)
    }

    /// Switch category. Prior unit selections are discarded and both sides
    /// reset to the first unit of the new category.
    pub(crate) fn on_category_changed(
        &mut self,
        name: &str,
    ) -> Result<&'static [&'static str], AppError> {
        let (category, units) = self.converter.catalog().units_for(name)?;
        let first = units.first().copied().ok_or_else(|| AppError::UnknownCategory {
            input: name.to_string(),
        })?;
        self.state.category = category;
        self.state.units = units;
        self.state.from_unit = first;
        self.state.to_unit = first;
        log::debug!("Category changed to {category}");
        Ok(units)
    }

    pub(crate) fn on_unit_selected(
        &mut self,
        side: UnitSide,
        unit: &str,
    ) -> Result<&'static str, AppError> {
        let category = self.state.category;
        let unit = self
            .converter
            .catalog()
            .canonical_unit(category, unit)
            .ok_or_else(|| AppError::UnsupportedUnit {
                category: category.name().to_string(),
                unit: unit.to_string(),
            })?;
        match side {
            UnitSide::From => self.state.from_unit = unit,
            UnitSide::To => self.state.to_unit = unit,
        }
        Ok(unit)
    }

    /// Convert the entered text with the current selection.
    ///
    /// Non-numeric text yields `InvalidInput` and leaves the log untouched.
    /// An engine fault is returned as an error and the result field shows
    /// the invalid-input marker.
    pub(crate) fn on_convert_requested(
        &mut self,
        text: &str,
    ) -> Result<ConvertOutcome, AppError> {
        let value = match parse_value(text) {
            Ok(value) => value,
            Err(_) => {
                log::debug!("Rejected input {text:?}");
                self.state.result = INVALID_INPUT.to_string();
                return Ok(ConvertOutcome::InvalidInput);
            }
        };

        let FormState {
            category,
            from_unit,
            to_unit,
            ..
        } = self.state;
        let result = match self.converter.convert(category, from_unit, to_unit, value) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Conversion failed: {e}");
                self.state.result = INVALID_INPUT.to_string();
                return Err(e);
            }
        };

        self.state.result = format_fixed(result, 4);
        let entry = HistoryEntry::new(value, from_unit, result, to_unit);
        self.state.history.push(entry.to_line());

        let persist_error = match self.history.append(&entry) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("Could not save history entry: {e}");
                Some(e)
            }
        };
        Ok(ConvertOutcome::Converted {
            entry,
            persist_error,
        })
    }

    /// Truncate the log and reset the history pane. The pane is reset even
    /// when truncation fails.
    pub(crate) fn on_clear_requested(&mut self) -> Result<(), AppError> {
        self.state.history.clear();
        self.history.clear().inspect_err(|e| {
            log::warn!("Could not clear history: {e}");
        })
    }
}
