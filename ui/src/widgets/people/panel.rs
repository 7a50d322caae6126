//! Main panel of the people grid: toolbar, status line and the table.

use egui::{Button, Response, Ui};
use holocron_business::grid::visible_rows;
use holocron_business::{
    GridState, LoadPeopleCommand, PeopleCompute, PeopleResult, Person, VisibleRowsCompute,
};
use holocron_states::StateCtx;

use super::table::people_table;
use crate::utils::colors::COLOR_RED;

/// Displays the people grid and its toolbar.
pub fn people_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        let result = state_ctx
            .cached::<PeopleCompute>()
            .map(|compute| compute.result.clone())
            .unwrap_or_default();

        toolbar(state_ctx, ui, &result);
        ui.add_space(8.0);

        match &result {
            PeopleResult::Loaded { people, .. } => {
                let rows = current_rows(state_ctx, people);
                let mut grid = state_ctx.state::<GridState>().clone();

                people_table(ui, people, &rows, &mut grid);
                if rows.is_empty() {
                    ui.label("No rows to show");
                }

                // Only write back on change so unrelated frames do not rerun the row model.
                if grid != *state_ctx.state::<GridState>() {
                    *state_ctx.state_mut::<GridState>() = grid;
                }
            }
            PeopleResult::Loading { .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading people...");
                });
            }
            PeopleResult::Error(error) => {
                ui.colored_label(COLOR_RED, format!("Failed to load people: {error}"));
            }
            PeopleResult::Idle => {
                ui.label("No data loaded yet.");
            }
        }
    })
    .response
}

fn toolbar(state_ctx: &mut StateCtx, ui: &mut Ui, result: &PeopleResult) {
    let loading = matches!(result, PeopleResult::Loading { .. });
    let active_filters = state_ctx.state::<GridState>().active_filter_count();

    ui.horizontal(|ui| {
        // A load in flight is never restarted.
        if ui.add_enabled(!loading, Button::new("🔄 Reload")).clicked() {
            state_ctx.dispatch::<LoadPeopleCommand>();
        }

        let clear = Button::new(format!("Clear filters ({active_filters})"));
        if ui.add_enabled(active_filters > 0, clear).clicked() {
            state_ctx.state_mut::<GridState>().clear_filters();
        }

        if let PeopleResult::Loaded { people, elapsed, .. } = result {
            ui.separator();
            let shown = current_rows(state_ctx, people).len();
            ui.label(format!(
                "Showing {shown} of {} people, loaded in {} ms",
                people.len(),
                elapsed.num_milliseconds()
            ));
        }
    });
}

/// Visible rows for `people`. Falls back to computing them in place when the cached
/// row model still describes a previous load.
fn current_rows(state_ctx: &StateCtx, people: &[Person]) -> Vec<usize> {
    match state_ctx.cached::<VisibleRowsCompute>() {
        Some(cached) if cached.total == people.len() => cached.rows.clone(),
        _ => visible_rows(people, state_ctx.state::<GridState>()),
    }
}
