//! Derived table view: which columns and rows are visible and in what
//! order. The record store itself is never reordered; sorting and
//! filtering produce an index list the renderer walks.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::state::columns::{ColumnId, FilterKind};
use crate::state::deal::{self, Deal};
use crate::state::prefs::{SortKey, UiPrefs};

/// Visible columns in display order, paired with their effective widths.
pub fn visible_columns(prefs: &UiPrefs) -> Vec<(ColumnId, f64)> {
    prefs
        .order()
        .into_iter()
        .filter(|column| !prefs.is_hidden(*column))
        .map(|column| (column, prefs.width(column)))
        .collect()
}

/// Indices into `deals` after filtering and sorting. Filters combine
/// with AND across columns; the sort is stable, so rows that compare
/// equal keep their store order.
pub fn visible_row_indices(deals: &[Deal], prefs: &UiPrefs) -> Vec<usize> {
    let mut rows: Vec<usize> = deals
        .iter()
        .enumerate()
        .filter(|(_, deal)| row_matches(deal, prefs))
        .map(|(index, _)| index)
        .collect();
    if !prefs.sort.is_empty() {
        rows.sort_by(|&a, &b| compare_rows(&deals[a], &deals[b], &prefs.sort));
    }
    rows
}

fn row_matches(deal: &Deal, prefs: &UiPrefs) -> bool {
    prefs.filters.iter().all(|(column, value)| {
        if value.is_empty() {
            return true;
        }
        let cell = cell_text(deal, *column);
        match column.filter() {
            FilterKind::Substring => cell
                .to_ascii_lowercase()
                .contains(&value.to_ascii_lowercase()),
            FilterKind::Exact => cell == *value,
        }
    })
}

fn compare_rows(a: &Deal, b: &Deal, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ordering = compare_column(a, b, key.column);
        let ordering = if key.desc { ordering.reverse() } else { ordering };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_column(a: &Deal, b: &Deal, column: ColumnId) -> Ordering {
    match column {
        ColumnId::Amount => a.amount.total_cmp(&b.amount),
        ColumnId::Notes => compare_optional(a.notes.as_deref(), b.notes.as_deref()),
        _ => compare_text(&cell_text(a, column), &cell_text(b, column)),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
}

fn compare_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_text(a, b),
    }
}

/// Display text for a cell, also the haystack for substring filters.
pub fn cell_text(deal: &Deal, column: ColumnId) -> String {
    match column {
        ColumnId::Company => deal.company.clone(),
        ColumnId::Owner => deal.owner.clone(),
        ColumnId::Stage => deal.stage.label().to_string(),
        ColumnId::Amount => deal::format_amount(deal.amount),
        ColumnId::Status => deal.status.label().to_string(),
        ColumnId::Created => deal.created.clone(),
        ColumnId::Notes => deal.notes.clone().unwrap_or_default(),
    }
}

/// Footer aggregates. Always computed over the full store, never the
/// filtered view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub sum: f64,
    pub avg: f64,
}

pub fn totals(deals: &[Deal]) -> Totals {
    let count = deals.len();
    let sum: f64 = deals.iter().map(|deal| deal.amount).sum();
    let avg = if count == 0 { 0.0 } else { sum / count as f64 };
    Totals { count, sum, avg }
}

/// True when every currently visible row is selected. An empty view
/// never counts as fully selected.
pub fn all_visible_selected(deals: &[Deal], visible: &[usize], selection: &BTreeSet<String>) -> bool {
    !visible.is_empty()
        && visible
            .iter()
            .all(|&index| selection.contains(&deals[index].id))
}

/// Ids of the rows in the current view, in display order.
pub fn visible_ids(deals: &[Deal], visible: &[usize]) -> Vec<String> {
    visible.iter().map(|&index| deals[index].id.clone()).collect()
}
