//! Table header: a sort button over the filter controls of each column.

use egui::{Button, Ui};
use egui_extras::TableRow;
use holocron_business::{COLUMNS, ColumnDef, GridState, SortDirection};

use super::filter::filter_editor;

/// Label of a header's sort button, with an arrow on the sorted column.
pub fn sort_label(column: &ColumnDef, grid: &GridState) -> String {
    match grid.sort {
        Some(sort) if sort.column == column.key => match sort.direction {
            SortDirection::Ascending => format!("{} ⬆", column.title),
            SortDirection::Descending => format!("{} ⬇", column.title),
        },
        _ => column.title.to_owned(),
    }
}

/// Renders every header cell. Clicking a title cycles that column's sort.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, grid: &mut GridState) {
    for column in &COLUMNS {
        header.col(|ui| {
            ui.vertical(|ui| {
                render_sort_button(ui, column, grid);
                filter_editor(ui, column.key, grid.filter_mut(column.key));
            });
        });
    }
}

fn render_sort_button(ui: &mut Ui, column: &ColumnDef, grid: &mut GridState) {
    let button = Button::new(egui::RichText::new(sort_label(column, grid)).strong()).frame(false);
    let response = ui
        .add_enabled(column.sortable, button)
        .on_hover_text(format!("Sort by {}", column.field));
    if response.clicked() {
        grid.toggle_sort(column.key);
    }
}
