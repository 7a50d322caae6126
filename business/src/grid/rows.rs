//! Row model: which records are shown, in which order.

use std::any::{Any, TypeId};

use holocron_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};
use log::debug;

use crate::grid::GridState;
use crate::people::{PeopleCompute, Person};

/// Indices into `people` of the rows that pass every active filter, in display order.
///
/// Filters combine with AND. The sort is stable, so rows that compare equal keep
/// their fetch order in both directions.
pub fn visible_rows(people: &[Person], grid: &GridState) -> Vec<usize> {
    let filters: Vec<_> = grid.active_filters().collect();

    let mut rows: Vec<usize> = people
        .iter()
        .enumerate()
        .filter(|(_, person)| filters.iter().all(|(key, filter)| filter.matches(person, *key)))
        .map(|(index, _)| index)
        .collect();

    if let Some(sort) = grid.sort {
        rows.sort_by(|a, b| sort.compare(&people[*a], &people[*b]));
    }

    rows
}

/// Derived row list, recalculated when the grid settings or the loaded people change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRowsCompute {
    pub rows: Vec<usize>,
    /// Number of loaded records before filtering.
    pub total: usize,
}

impl Compute for VisibleRowsCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<GridState>()],
            vec![TypeId::of::<PeopleCompute>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let (Ok(grid), Ok(people)) = (
            deps.get_state_ref::<GridState>(),
            deps.get_compute_ref::<PeopleCompute>(),
        ) else {
            return;
        };

        let next = match people.people() {
            Some(people) => Self {
                rows: visible_rows(people, grid),
                total: people.len(),
            },
            None => Self::default(),
        };

        if next != *self {
            debug!("Visible rows: {} of {}", next.rows.len(), next.total);
            updater.set(next);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
