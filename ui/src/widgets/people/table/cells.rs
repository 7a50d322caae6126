//! Cell rendering functions for the people table.

use egui::{Label, RichText, Ui};

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.add(Label::new(text).truncate());
}

/// Counts and measurements, in monospace so digits line up.
#[inline]
pub fn render_number_cell(ui: &mut Ui, text: &str) {
    ui.add(Label::new(RichText::new(text).monospace()).truncate());
}

/// The record's own SWAPI URL, opened in the browser on click.
#[inline]
pub fn render_link_cell(ui: &mut Ui, url: &str) {
    ui.hyperlink_to(url, url);
}
