//! Single-column sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::grid::ColumnKey;
use crate::people::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort after a header click: none, ascending, descending, then none again.
    /// Clicking another column starts over at ascending.
    pub fn cycle(current: Option<Self>, clicked: ColumnKey) -> Option<Self> {
        match current {
            Some(Self {
                column,
                direction: SortDirection::Ascending,
            }) if column == clicked => Some(Self {
                column,
                direction: SortDirection::Descending,
            }),
            Some(Self {
                column,
                direction: SortDirection::Descending,
            }) if column == clicked => None,
            _ => Some(Self {
                column: clicked,
                direction: SortDirection::Ascending,
            }),
        }
    }

    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        let ordering = compare_people(a, b, self.column);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Ascending order of two records on one column. Blank numeric cells come first.
pub fn compare_people(a: &Person, b: &Person, key: ColumnKey) -> Ordering {
    if key.sorts_numerically() {
        let (a, b) = (a.cell_number(key), b.cell_number(key));
        return match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.total_cmp(&b),
        };
    }

    let (a, b) = (a.cell_text(key), b.cell_text(key));
    a.to_lowercase().cmp(&b.to_lowercase())
}
