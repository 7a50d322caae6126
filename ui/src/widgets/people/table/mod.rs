//! Table rendering for the people grid, split into:
//! - `columns`: column widths
//! - `header`: sort buttons and filter controls
//! - `filter`: the filter editor of one column
//! - `row`: one person per row
//! - `cells`: cell rendering per column type

mod cells;
pub mod columns;
mod filter;
pub mod header;
pub mod row;

use egui::{Layout, ScrollArea, Ui};
use egui_extras::TableBuilder;
use holocron_business::{COLUMNS, GridState, Person};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};

/// Renders the people table. Edits made in the header land in `grid`.
pub fn people_table(ui: &mut Ui, people: &[Person], rows: &[usize], grid: &mut GridState) {
    ScrollArea::horizontal()
        .id_salt("people_table_scroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0);
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    header::render_table_header(&mut header, grid);
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        // Rows can lag one frame behind a fresh load.
                        match rows.get(row.index()).and_then(|i| people.get(*i)) {
                            Some(person) => row::render_person_row(&mut row, person),
                            None => {
                                for _ in COLUMNS {
                                    row.col(|_| {});
                                }
                            }
                        }
                    });
                });
        });
}
