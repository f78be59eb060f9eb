use dioxus::prelude::*;
use std::collections::BTreeSet;

use tracing::info;

use crate::state::deal::{self, Deal};
use crate::state::nav::FocusCoord;
use crate::state::prefs::UiPrefs;
use crate::ui::cells::EditingCell;

pub fn new_deal(mut deals: Signal<Vec<Deal>>) {
    let id = deals.with_mut(deal::new_deal);
    info!(deal = %id, "created new deal");
}

pub fn duplicate_deal(mut deals: Signal<Vec<Deal>>, id: &str) {
    let copy = deals.with_mut(|records| deal::duplicate_deal(records, id));
    if let Some(copy) = copy {
        info!(source = id, copy = %copy, "duplicated deal");
    }
}

/// Remove a deal and scrub it from selection and expansion so no
/// stale id lingers in the view state.
pub fn delete_deal(
    mut deals: Signal<Vec<Deal>>,
    mut prefs: Signal<UiPrefs>,
    mut expanded: Signal<BTreeSet<String>>,
    id: &str,
) {
    let removed = deals.with_mut(|records| deal::delete_deal(records, id));
    if removed {
        prefs.with_mut(|prefs| {
            prefs.selection.remove(id);
        });
        expanded.with_mut(|expanded| {
            expanded.remove(id);
        });
        info!(deal = id, "deleted deal");
    }
}

/// Restore the seed dataset and factory view preferences, dropping
/// any in-flight edit and expansion.
pub fn reset(
    mut deals: Signal<Vec<Deal>>,
    mut prefs: Signal<UiPrefs>,
    mut expanded: Signal<BTreeSet<String>>,
    mut editing: Signal<Option<EditingCell>>,
    mut focus: Signal<FocusCoord>,
) {
    deals.set(deal::seed_deals());
    prefs.with_mut(|prefs| prefs.reset());
    expanded.with_mut(|expanded| expanded.clear());
    editing.set(None);
    focus.set(FocusCoord::default());
    info!("reset to seed data and default preferences");
}

/// Placeholder bulk operation over the selected rows: surfaces the
/// target ids in a notice that clears itself after a few seconds.
pub fn bulk_action(prefs: Signal<UiPrefs>, mut notice: Signal<Option<String>>) {
    let ids: Vec<String> = prefs.read().selection.iter().cloned().collect();
    if ids.is_empty() {
        return;
    }
    info!(count = ids.len(), "bulk action requested");
    notice.set(Some(format!("Bulk action on: {}", ids.join(", "))));
    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(4)).await;
        notice.set(None);
    });
}
