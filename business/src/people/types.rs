//! Wire types as SWAPI returns them.

use serde::{Deserialize, Serialize};

/// One page of the `people` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeoplePage {
    #[serde(default)]
    pub count: Option<u32>,
    /// URL of the following page; `null` on the last one.
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<RawPerson>,
}

impl PeoplePage {
    /// The next page to request, treating an empty link the same as `null`.
    pub fn next_page(&self) -> Option<&str> {
        self.next
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// A person before normalization. Relation fields hold resource URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPerson {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

/// The only part of a planet resource the app reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homeworld {
    pub name: String,
}
