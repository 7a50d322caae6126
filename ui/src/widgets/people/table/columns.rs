//! Column definitions for the people table.

use egui_extras::Column;
use holocron_business::{COLUMNS, ColumnKey, FilterKind};

pub const ROW_HEIGHT: f32 = 24.0;
/// Sort button, operator picker and up to two inputs.
pub const HEADER_HEIGHT: f32 = 104.0;

/// Initial width of a column; every column stays resizable.
pub fn column_width(key: ColumnKey) -> f32 {
    match key {
        ColumnKey::Name | ColumnKey::Homeworld => 160.0,
        ColumnKey::Created | ColumnKey::Edited => 210.0,
        ColumnKey::Url => 260.0,
        key if key.def().filter == FilterKind::Number => 100.0,
        _ => 120.0,
    }
}

/// One `egui_extras` column per entry of [`COLUMNS`], in display order.
pub fn table_columns() -> Vec<Column> {
    COLUMNS
        .iter()
        .map(|column| {
            Column::initial(column_width(column.key))
                .at_least(80.0)
                .clip(true)
        })
        .collect()
}
