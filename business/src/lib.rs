//! Business layer for Holocron: fetches the SWAPI `people` collection, normalizes each
//! record for display and models the people grid (filters, sort, visible rows).
//!
//! Everything is wired through `holocron_states`: register the states, computes and
//! command below on a `StateCtx`, then dispatch [`LoadPeopleCommand`].

mod config;
pub mod grid;
pub mod http;
pub mod people;

pub use config::{DEFAULT_API_BASE_URL, SwapiConfig};
pub use grid::{
    COLUMNS, ColumnDef, ColumnFilter, ColumnKey, FilterKind, GridState, NumberFilter,
    NumberOperator, SortDirection, SortSpec, TextFilter, TextOperator, VisibleRowsCompute,
};
pub use people::{
    LoadPeopleCommand, PeopleCompute, PeopleResult, Person, SpeciesCount, SwapiError,
};
