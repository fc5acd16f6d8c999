use comfy_table::{Cell, Color};

use crate::consts::HISTORY_BANNER;
use crate::core::{Category, RateTable, UnitCatalog};
use crate::output::format::{create_styled_table, format_rate, header_cell, right_cell};

pub(crate) fn render_categories_table(catalog: &UnitCatalog, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Category", use_color),
        header_cell("Units", use_color),
    ]);
    for category in catalog.categories() {
        table.add_row(vec![
            Cell::new(category.name()),
            Cell::new(catalog.units(category).join(", ")),
        ]);
    }
    table.to_string()
}

pub(crate) fn render_units_table(category: Category, units: &[&str], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell(&format!("{category} units"), use_color),
    ]);
    for (i, unit) in units.iter().enumerate() {
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None, false),
            Cell::new(unit),
        ]);
    }
    table.to_string()
}

pub(crate) fn render_rates_table(rates: &RateTable, use_color: bool) -> String {
    let base_color = if use_color { Some(Color::Green) } else { None };
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Currency", use_color),
        header_cell(&format!("Per 1 {}", rates.base()), use_color),
    ]);
    for entry in rates.entries() {
        let is_base = entry.code == rates.base();
        table.add_row(vec![
            Cell::new(&entry.code),
            right_cell(
                &format_rate(entry.rate),
                if is_base { base_color } else { None },
                is_base,
            ),
        ]);
    }
    table.to_string()
}

/// Banner followed by one line per entry, as the history pane shows it
pub(crate) fn render_history(lines: &[String]) -> String {
    let mut out = String::from(HISTORY_BANNER);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
