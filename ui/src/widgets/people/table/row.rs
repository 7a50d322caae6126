//! Row rendering for the people table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use holocron_business::{COLUMNS, ColumnKey, FilterKind, Person};

use super::cells::{render_link_cell, render_number_cell, render_text_cell};

/// Renders one person, a cell per column in [`COLUMNS`] order.
#[inline]
pub fn render_person_row(row: &mut TableRow<'_, '_>, person: &Person) {
    for column in &COLUMNS {
        row.col(|ui| {
            let text = person.cell_text(column.key);
            match (column.key, column.filter) {
                (ColumnKey::Url, _) => render_link_cell(ui, &text),
                (ColumnKey::Species, _) | (_, FilterKind::Number) => render_number_cell(ui, &text),
                (_, FilterKind::Text) => render_text_cell(ui, &text),
            }
            draw_cell_bottom_border(ui);
        });
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
