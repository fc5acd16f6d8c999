//! Core module - unit catalog, currency rates and the conversion engine

mod catalog;
mod engine;
mod rates;

pub(crate) use catalog::{Category, UnitCatalog};
pub(crate) use engine::Converter;
pub(crate) use rates::{RateEntry, RateTable};
