//! Grid model for the people table: static column configuration, per-column filters,
//! single-column sorting and the derived list of visible rows.
//!
//! Apart from [`VisibleRowsCompute`], everything here is plain data and pure functions.

mod columns;
mod filter;
mod rows;
mod sort;
mod state;

pub use columns::{COLUMNS, ColumnDef, ColumnKey, FilterKind};
pub use filter::{
    ColumnFilter, NumberFilter, NumberOperator, TextFilter, TextOperator, parse_number,
};
pub use rows::{VisibleRowsCompute, visible_rows};
pub use sort::{SortDirection, SortSpec, compare_people};
pub use state::GridState;
