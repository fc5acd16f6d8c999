use serde::Serialize;
use std::path::Path;

use crate::core::{Category, RateEntry, RateTable, UnitCatalog};
use crate::history::HistoryEntry;
use crate::output::format::to_json_string;

#[derive(Serialize)]
struct CategoryJson<'a> {
    category: Category,
    units: &'a [&'a str],
}

#[derive(Serialize)]
struct RatesJson<'a> {
    base: &'a str,
    rates: &'a [RateEntry],
}

#[derive(Serialize)]
struct HistoryJson<'a> {
    path: String,
    entries: &'a [String],
}

#[derive(Serialize)]
struct ConversionJson<'a> {
    category: Category,
    #[serde(flatten)]
    entry: &'a HistoryEntry,
    line: String,
    saved: bool,
}

pub(crate) fn output_categories_json(catalog: &UnitCatalog) -> String {
    let output: Vec<CategoryJson<'_>> = catalog
        .categories()
        .map(|category| CategoryJson {
            category,
            units: catalog.units(category),
        })
        .collect();
    to_json_string(&output, "[]")
}

pub(crate) fn output_units_json(category: Category, units: &[&str]) -> String {
    to_json_string(&CategoryJson { category, units }, "{}")
}

pub(crate) fn output_rates_json(rates: &RateTable) -> String {
    to_json_string(
        &RatesJson {
            base: rates.base(),
            rates: rates.entries(),
        },
        "{}",
    )
}

pub(crate) fn output_history_json(path: &Path, lines: &[String]) -> String {
    to_json_string(
        &HistoryJson {
            path: path.display().to_string(),
            entries: lines,
        },
        "{}",
    )
}

pub(crate) fn output_conversion_json(
    category: Category,
    entry: &HistoryEntry,
    saved: bool,
) -> String {
    to_json_string(
        &ConversionJson {
            category,
            entry,
            line: entry.to_line(),
            saved,
        },
        "{}",
    )
}
