//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for a finished load.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for a failed load.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for a load in flight.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Gray before anything was requested.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(140, 140, 140);
