mod load_status;
pub mod people;

pub use load_status::load_status;
pub use people::people_panel;
