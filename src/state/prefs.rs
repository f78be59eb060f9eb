//! Persisted view preferences: sort keys, filter values, column layout
//! and row selection. The whole struct round-trips through the JSON
//! blob written by `io::prefs_io`; every field defaults so partial or
//! older blobs still load.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::state::columns::{ColumnId, MIN_COLUMN_WIDTH};

/// One entry of the ordered sort specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: ColumnId,
    #[serde(default)]
    pub desc: bool,
}

/// Column layout overrides. Empty collections mean "use defaults".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    #[serde(default)]
    pub hidden: BTreeMap<ColumnId, bool>,
    #[serde(default)]
    pub order: Vec<ColumnId>,
    #[serde(default)]
    pub widths: BTreeMap<ColumnId, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPrefs {
    #[serde(default)]
    pub sort: Vec<SortKey>,
    #[serde(default)]
    pub filters: BTreeMap<ColumnId, String>,
    #[serde(default)]
    pub column: ColumnLayout,
    #[serde(default)]
    pub selection: BTreeSet<String>,
}

impl UiPrefs {
    /// Advance the sort cycle for a column: none to ascending to
    /// descending to none. Without `multi` the column becomes the only
    /// sort key; with `multi` it is appended to (or advanced within)
    /// the existing specification.
    pub fn toggle_sort(&mut self, column: ColumnId, multi: bool) {
        if multi {
            if let Some(pos) = self.sort.iter().position(|key| key.column == column) {
                if self.sort[pos].desc {
                    self.sort.remove(pos);
                } else {
                    self.sort[pos].desc = true;
                }
            } else {
                self.sort.push(SortKey { column, desc: false });
            }
            return;
        }
        let current = self
            .sort
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.desc);
        match current {
            None => self.sort = vec![SortKey { column, desc: false }],
            Some(false) => self.sort = vec![SortKey { column, desc: true }],
            Some(true) => self.sort.clear(),
        }
    }

    /// Replace the whole sort specification with a single key.
    pub fn set_sort(&mut self, column: ColumnId, desc: bool) {
        self.sort = vec![SortKey { column, desc }];
    }

    /// Drop the given column from the sort specification, keeping any
    /// other keys in place.
    pub fn clear_sort(&mut self, column: ColumnId) {
        self.sort.retain(|key| key.column != column);
    }

    /// Current direction for a column: `Some(false)` ascending,
    /// `Some(true)` descending, `None` unsorted.
    pub fn sort_direction(&self, column: ColumnId) -> Option<bool> {
        self.sort
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.desc)
    }

    /// Store a filter value for a column. Empty input removes the
    /// filter entirely so absent and cleared look the same.
    pub fn set_filter(&mut self, column: ColumnId, value: String) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, trimmed.to_string());
        }
    }

    pub fn filter(&self, column: ColumnId) -> Option<&str> {
        self.filters.get(&column).map(String::as_str)
    }

    /// Drop every filter along with the row selection.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.selection.clear();
    }

    pub fn is_hidden(&self, column: ColumnId) -> bool {
        self.column.hidden.get(&column).copied().unwrap_or(false)
    }

    pub fn toggle_hidden(&mut self, column: ColumnId) {
        let hidden = !self.is_hidden(column);
        self.column.hidden.insert(column, hidden);
    }

    pub fn hidden_columns(&self) -> Vec<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .filter(|column| self.is_hidden(*column))
            .collect()
    }

    /// Effective width of a column: the stored override or the
    /// built-in default. Widths survive hiding, so re-showing a column
    /// brings its old width back.
    pub fn width(&self, column: ColumnId) -> f64 {
        self.column
            .widths
            .get(&column)
            .copied()
            .unwrap_or_else(|| column.default_width())
    }

    pub fn set_width(&mut self, column: ColumnId, width: f64) {
        self.column
            .widths
            .insert(column, width.max(MIN_COLUMN_WIDTH));
    }

    /// Effective column order: the stored order with duplicates
    /// dropped and any missing columns appended in default position,
    /// or the default order when nothing is stored.
    pub fn order(&self) -> Vec<ColumnId> {
        if self.column.order.is_empty() {
            return ColumnId::ALL.to_vec();
        }
        let mut seen = BTreeSet::new();
        let mut order: Vec<ColumnId> = self
            .column
            .order
            .iter()
            .copied()
            .filter(|column| seen.insert(*column))
            .collect();
        for column in ColumnId::ALL {
            if seen.insert(column) {
                order.push(column);
            }
        }
        order
    }

    /// Swap two columns addressed by their position among the visible
    /// columns. Hidden columns keep their slots in the stored order.
    pub fn move_visible_column(&mut self, from: usize, to: usize) -> bool {
        let order = self.order();
        let visible: Vec<ColumnId> = order
            .iter()
            .copied()
            .filter(|column| !self.is_hidden(*column))
            .collect();
        let (Some(&a), Some(&b)) = (visible.get(from), visible.get(to)) else {
            return false;
        };
        let mut order = order;
        let (Some(pos_a), Some(pos_b)) = (
            order.iter().position(|c| *c == a),
            order.iter().position(|c| *c == b),
        ) else {
            return false;
        };
        order.swap(pos_a, pos_b);
        self.column.order = order;
        true
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Select or deselect a batch of row ids in one pass.
    pub fn set_selected<I>(&mut self, ids: I, selected: bool)
    where
        I: IntoIterator<Item = String>,
    {
        for id in ids {
            if selected {
                self.selection.insert(id);
            } else {
                self.selection.remove(&id);
            }
        }
    }

    /// Back to factory settings: no sort, no filters, default layout,
    /// empty selection.
    pub fn reset(&mut self) {
        *self = UiPrefs::default();
    }
}
