mod format;
mod json;
mod table;

pub(crate) use json::{
    output_categories_json, output_conversion_json, output_history_json, output_rates_json,
    output_units_json,
};
pub(crate) use table::{
    render_categories_table, render_history, render_rates_table, render_units_table,
};
