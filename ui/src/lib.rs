#![warn(clippy::all, rust_2018_idioms)]

//! Holocron UI: an egui grid of every SWAPI character.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::HolocronApp;
