use dioxus::prelude::*;

use crate::state::columns::ColumnId;
use crate::state::deal::{Stage, Status};
use crate::state::prefs::UiPrefs;
use crate::ui::actions;

#[component]
pub fn Toolbar(prefs: Signal<UiPrefs>, notice: Signal<Option<String>>) -> Element {
    let prefs_snapshot = prefs.read().clone();
    let search_value = prefs_snapshot
        .filter(ColumnId::Company)
        .unwrap_or_default()
        .to_string();
    let stage_value = prefs_snapshot
        .filter(ColumnId::Stage)
        .unwrap_or_default()
        .to_string();
    let status_value = prefs_snapshot
        .filter(ColumnId::Status)
        .unwrap_or_default()
        .to_string();
    let has_filters = !prefs_snapshot.filters.is_empty();
    let selected_count = prefs_snapshot.selection.len();

    rsx! {
        div { class: "toolbar",
            // Search group
            div { class: "toolbar-group",
                span { class: "toolbar-icon", "\u{1F50D}" }
                input {
                    class: "toolbar-input",
                    id: "input-search",
                    placeholder: "Search company...",
                    value: "{search_value}",
                    oninput: move |evt| {
                        let query = evt.value();
                        prefs.with_mut(|prefs| prefs.set_filter(ColumnId::Company, query));
                    },
                }
            }
            div { class: "toolbar-separator" }

            // Filter group
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select",
                    id: "select-stage-filter",
                    value: "{stage_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        prefs.with_mut(|prefs| prefs.set_filter(ColumnId::Stage, value));
                    },
                    option { value: "", "Stage" }
                    for stage in Stage::ALL {
                        option { value: "{stage.label()}", "{stage.label()}" }
                    }
                }
                select {
                    class: "toolbar-select",
                    id: "select-status-filter",
                    value: "{status_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        prefs.with_mut(|prefs| prefs.set_filter(ColumnId::Status, value));
                    },
                    option { value: "", "Status" }
                    for status in Status::ALL {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-clear-filters",
                    disabled: !has_filters,
                    onclick: move |_| {
                        prefs.with_mut(|prefs| prefs.clear_filters());
                    },
                    "\u{2715} Clear filters"
                }
            }

            // Info area (right-aligned)
            div { class: "toolbar-info",
                if selected_count > 0 {
                    span { class: "selected-count", id: "selected-count", "{selected_count} selected" }
                    button {
                        class: "toolbar-btn",
                        id: "btn-bulk-action",
                        onclick: move |_| actions::bulk_action(prefs, notice),
                        "Bulk Action"
                    }
                }
                if let Some(text) = notice.read().as_ref() {
                    span { class: "notice", id: "notice", "{text}" }
                }
            }
        }
    }
}
