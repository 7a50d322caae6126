use std::fmt;

use serde::{Deserialize, Serialize};

/// Species count, keeping "no species listed" apart from a real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesCount {
    /// The upstream list was empty; displayed as `n/a`.
    NotAvailable,
    Count(u32),
}

impl SpeciesCount {
    pub const SENTINEL: &'static str = "n/a";

    pub fn count(self) -> Option<u32> {
        match self {
            Self::NotAvailable => None,
            Self::Count(n) => Some(n),
        }
    }
}

impl fmt::Display for SpeciesCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => f.write_str(Self::SENTINEL),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

/// A person ready for display.
///
/// Holds no relation URLs besides its own `url`: the homeworld is already resolved
/// to a name and list relations are reduced to counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Centimetres as text, e.g. `"172"` or `"unknown"`.
    pub height: String,
    /// Kilograms as text, e.g. `"77"`, `"1,358"` or `"unknown"`.
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    pub films: u32,
    pub species: SpeciesCount,
    pub vehicles: u32,
    pub starships: u32,
    pub created: String,
    pub edited: String,
    pub url: String,
}

#[cfg(test)]
impl Person {
    /// Record with unknown measurements and no relations, for table tests.
    pub(crate) fn sample(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            height: "unknown".to_owned(),
            mass: "unknown".to_owned(),
            hair_color: "n/a".to_owned(),
            skin_color: "n/a".to_owned(),
            eye_color: "unknown".to_owned(),
            birth_year: "unknown".to_owned(),
            gender: "n/a".to_owned(),
            homeworld: "unknown".to_owned(),
            films: 0,
            species: SpeciesCount::NotAvailable,
            vehicles: 0,
            starships: 0,
            created: "2014-12-10T15:10:51.357000Z".to_owned(),
            edited: "2014-12-20T21:17:50.309000Z".to_owned(),
            url: format!("https://swapi.dev/api/people/{}/", name.len()),
        }
    }

    pub(crate) fn with(mut self, edit: impl FnOnce(&mut Self)) -> Self {
        edit(&mut self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_display() {
        assert_eq!(SpeciesCount::NotAvailable.to_string(), "n/a");
        assert_eq!(SpeciesCount::Count(2).to_string(), "2");
        assert_eq!(SpeciesCount::NotAvailable.count(), None);
        assert_eq!(SpeciesCount::Count(1).count(), Some(1));
    }
}
