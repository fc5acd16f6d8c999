use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Rate column text; trailing zeros trimmed but at least two decimals
pub(super) fn format_rate(rate: f64) -> String {
    let mut s = format!("{rate:.6}");
    while s.ends_with('0') && s.len() - s.find('.').map_or(0, |i| i + 1) > 2 {
        s.pop();
    }
    s
}

pub(super) fn to_json_string<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        fallback.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rate_trims_zeros() {
        assert_eq!(format_rate(83.0), "83.00");
        assert_eq!(format_rate(0.92), "0.92");
        assert_eq!(format_rate(1.0), "1.00");
        assert_eq!(format_rate(0.123456), "0.123456");
        assert_eq!(format_rate(1.5), "1.50");
    }

    #[test]
    fn styled_table_renders_header() {
        let mut table = create_styled_table();
        table.set_header(vec![header_cell("Code", false)]);
        table.add_row(vec![right_cell("USD", None, false)]);
        let rendered = table.to_string();
        assert!(rendered.contains("Code"));
        assert!(rendered.contains("USD"));
        assert!(rendered.contains('├'));
    }
}
