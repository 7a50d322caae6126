use std::any::Any;
use std::collections::BTreeMap;

use holocron_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};

use crate::grid::{COLUMNS, ColumnFilter, ColumnKey, SortSpec};

/// User-editable grid settings: one filter per column and the active sort.
///
/// Persisted across sessions by the UI, so every field defaults when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridState {
    filters: BTreeMap<ColumnKey, ColumnFilter>,
    pub sort: Option<SortSpec>,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            filters: COLUMNS
                .iter()
                .map(|column| (column.key, ColumnFilter::for_kind(column.filter)))
                .collect(),
            sort: None,
        }
    }
}

impl GridState {
    /// Filter of `key`, if one of the column's kind is set.
    pub fn filter(&self, key: ColumnKey) -> Option<&ColumnFilter> {
        self.filters
            .get(&key)
            .filter(|filter| filter.kind() == key.def().filter)
    }

    /// Editable filter of `key`. A missing filter, or one restored with the wrong kind,
    /// is replaced by an empty filter of the column's kind.
    pub fn filter_mut(&mut self, key: ColumnKey) -> &mut ColumnFilter {
        let kind = key.def().filter;
        let filter = self
            .filters
            .entry(key)
            .or_insert_with(|| ColumnFilter::for_kind(kind));
        if filter.kind() != kind {
            *filter = ColumnFilter::for_kind(kind);
        }
        filter
    }

    /// Active filters in column order.
    pub fn active_filters(&self) -> impl Iterator<Item = (ColumnKey, &ColumnFilter)> {
        COLUMNS.iter().filter_map(|column| {
            self.filter(column.key)
                .filter(|filter| filter.is_active())
                .map(|filter| (column.key, filter))
        })
    }

    pub fn active_filter_count(&self) -> usize {
        self.active_filters().count()
    }

    pub fn toggle_sort(&mut self, key: ColumnKey) {
        if key.def().sortable {
            self.sort = SortSpec::cycle(self.sort, key);
        }
    }

    /// Reset every filter; the sort is kept.
    pub fn clear_filters(&mut self) {
        self.filters = Self::default().filters;
    }
}

impl State for GridState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
