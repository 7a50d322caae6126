//! Column definitions, declared once in display order.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::grid::parse_number;
use crate::people::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnKey {
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Homeworld,
    Films,
    Species,
    Vehicles,
    Starships,
    Created,
    Edited,
    Url,
}

/// Which filter widget a column gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    Text,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: ColumnKey,
    /// Record field name, as SWAPI spells it.
    pub field: &'static str,
    pub title: &'static str,
    pub filter: FilterKind,
    pub sortable: bool,
}

impl ColumnDef {
    const fn text(key: ColumnKey, field: &'static str, title: &'static str) -> Self {
        Self {
            key,
            field,
            title,
            filter: FilterKind::Text,
            sortable: true,
        }
    }

    const fn number(key: ColumnKey, field: &'static str, title: &'static str) -> Self {
        Self {
            key,
            field,
            title,
            filter: FilterKind::Number,
            sortable: true,
        }
    }
}

/// Every column, in display order. Indexed by `ColumnKey as usize`.
pub const COLUMNS: [ColumnDef; 16] = [
    ColumnDef::text(ColumnKey::Name, "name", "Name"),
    ColumnDef::number(ColumnKey::Height, "height", "Height"),
    ColumnDef::number(ColumnKey::Mass, "mass", "Mass"),
    ColumnDef::text(ColumnKey::HairColor, "hair_color", "Hair Color"),
    ColumnDef::text(ColumnKey::SkinColor, "skin_color", "Skin Color"),
    ColumnDef::text(ColumnKey::EyeColor, "eye_color", "Eye Color"),
    ColumnDef::text(ColumnKey::BirthYear, "birth_year", "Birth Year"),
    ColumnDef::text(ColumnKey::Gender, "gender", "Gender"),
    ColumnDef::text(ColumnKey::Homeworld, "homeworld", "Homeworld"),
    ColumnDef::number(ColumnKey::Films, "films", "Films"),
    // Text filter: the column mixes counts with the `n/a` sentinel.
    ColumnDef::text(ColumnKey::Species, "species", "Species"),
    ColumnDef::number(ColumnKey::Vehicles, "vehicles", "Vehicles"),
    ColumnDef::number(ColumnKey::Starships, "starships", "Starships"),
    ColumnDef::text(ColumnKey::Created, "created", "Created"),
    ColumnDef::text(ColumnKey::Edited, "edited", "Edited"),
    ColumnDef::text(ColumnKey::Url, "url", "Url"),
];

impl ColumnKey {
    pub fn def(self) -> &'static ColumnDef {
        &COLUMNS[self as usize]
    }

    /// Sorting compares numbers for numeric columns and for species counts
    /// (`n/a` sorts with the blanks).
    pub fn sorts_numerically(self) -> bool {
        self.def().filter == FilterKind::Number || self == Self::Species
    }
}

impl Person {
    /// Display text of one cell.
    pub fn cell_text(&self, key: ColumnKey) -> Cow<'_, str> {
        match key {
            ColumnKey::Name => Cow::Borrowed(&self.name),
            ColumnKey::Height => Cow::Borrowed(&self.height),
            ColumnKey::Mass => Cow::Borrowed(&self.mass),
            ColumnKey::HairColor => Cow::Borrowed(&self.hair_color),
            ColumnKey::SkinColor => Cow::Borrowed(&self.skin_color),
            ColumnKey::EyeColor => Cow::Borrowed(&self.eye_color),
            ColumnKey::BirthYear => Cow::Borrowed(&self.birth_year),
            ColumnKey::Gender => Cow::Borrowed(&self.gender),
            ColumnKey::Homeworld => Cow::Borrowed(&self.homeworld),
            ColumnKey::Films => Cow::Owned(self.films.to_string()),
            ColumnKey::Species => Cow::Owned(self.species.to_string()),
            ColumnKey::Vehicles => Cow::Owned(self.vehicles.to_string()),
            ColumnKey::Starships => Cow::Owned(self.starships.to_string()),
            ColumnKey::Created => Cow::Borrowed(&self.created),
            ColumnKey::Edited => Cow::Borrowed(&self.edited),
            ColumnKey::Url => Cow::Borrowed(&self.url),
        }
    }

    /// Numeric value of one cell; `None` means blank (`"unknown"`, `n/a`, free text).
    pub fn cell_number(&self, key: ColumnKey) -> Option<f64> {
        match key {
            ColumnKey::Films => Some(f64::from(self.films)),
            ColumnKey::Vehicles => Some(f64::from(self.vehicles)),
            ColumnKey::Starships => Some(f64::from(self.starships)),
            ColumnKey::Species => self.species.count().map(f64::from),
            other => parse_number(&self.cell_text(other)),
        }
    }
}
