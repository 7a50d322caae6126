use egui::{Color32, Response, Ui};
use holocron_business::{PeopleCompute, PeopleResult};
use holocron_states::StateCtx;

use crate::utils::colors::{COLOR_AMBER, COLOR_GRAY, COLOR_GREEN, COLOR_RED};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

fn status_info(state_ctx: &StateCtx) -> (String, Color32) {
    match state_ctx.cached::<PeopleCompute>().map(|c| &c.result) {
        Some(PeopleResult::Loaded {
            people, loaded_at, ..
        }) => (
            format!(
                "{} people, loaded {}",
                people.len(),
                loaded_at.with_timezone(&chrono::Local).format("%H:%M:%S")
            ),
            COLOR_GREEN,
        ),
        Some(PeopleResult::Loading { .. }) => ("Loading people".to_owned(), COLOR_AMBER),
        Some(PeopleResult::Error(error)) => (format!("Load failed: {error}"), COLOR_RED),
        Some(PeopleResult::Idle) | None => ("Not loaded".to_owned(), COLOR_GRAY),
    }
}

/// Draws a status dot for the people load, with details on hover.
pub fn load_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let (tooltip, color) = status_info(state_ctx);

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .circle(rect.center(), STATUS_DOT_RADIUS, color, egui::Stroke::NONE);

    response.on_hover_text(tooltip)
}
