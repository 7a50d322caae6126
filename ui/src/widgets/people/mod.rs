//! People grid.
//!
//! - `panel`: toolbar, load status and the table frame
//! - `table`: column widths, header with sort and filter controls, rows and cells

mod panel;
pub mod table;

pub use panel::people_panel;
