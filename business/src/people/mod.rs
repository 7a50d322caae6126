//! SWAPI `people` domain: wire types, normalized records, the fetch pipeline and the
//! compute-shaped cache the UI reads.
//!
//! UI code should only read [`PeopleCompute`] via `ctx.cached::<PeopleCompute>()` and
//! trigger loads via `ctx.dispatch::<LoadPeopleCommand>()`.

pub mod api;
mod error;
mod load_compute;
mod normalize;
mod record;
mod types;

pub use error::SwapiError;
pub use load_compute::{LoadPeopleCommand, PeopleCompute, PeopleResult};
pub use normalize::{normalize_person, relation_count, species_count};
pub use record::{Person, SpeciesCount};
pub use types::{Homeworld, PeoplePage, RawPerson};
