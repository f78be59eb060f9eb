use dioxus::prelude::{Key, *};

use crate::state::columns::ColumnId;
use crate::state::deal::{self, Deal, DealEdit, Stage, Status};

/// The single cell being edited, if any. Hoisted to the app root so
/// opening one editor closes any other.
#[derive(Clone, Debug, PartialEq)]
pub struct EditingCell {
    pub deal_id: String,
    pub column: ColumnId,
    pub draft: String,
}

impl EditingCell {
    pub fn is_for(&self, deal_id: &str, column: ColumnId) -> bool {
        self.deal_id == deal_id && self.column == column
    }
}

fn is_editing(editing: &Signal<Option<EditingCell>>, deal_id: &str, column: ColumnId) -> bool {
    editing
        .read()
        .as_ref()
        .map(|cell| cell.is_for(deal_id, column))
        .unwrap_or(false)
}

fn current_draft(editing: &Signal<Option<EditingCell>>) -> String {
    editing
        .read()
        .as_ref()
        .map(|cell| cell.draft.clone())
        .unwrap_or_default()
}

/// Plain text editor used by every column without a specialized one.
/// Click to edit, Enter or blur commits, Escape discards.
#[component]
pub fn TextCell(
    deals: Signal<Vec<Deal>>,
    editing: Signal<Option<EditingCell>>,
    deal_id: String,
    column: ColumnId,
    value: String,
) -> Element {
    if is_editing(&editing, &deal_id, column) {
        rsx! {
            input {
                class: "cell-input",
                id: "cell-input-{deal_id}-{column.as_str()}",
                value: "{current_draft(&editing)}",
                autofocus: true,
                oninput: move |evt| {
                    let value = evt.value();
                    let mut editing = editing;
                    editing.with_mut(|cell| {
                        if let Some(cell) = cell {
                            cell.draft = value;
                        }
                    });
                },
                onblur: move |_| {
                    commit_text(deals, editing);
                },
                onkeydown: move |evt| {
                    evt.stop_propagation();
                    match evt.key() {
                        Key::Enter => commit_text(deals, editing),
                        Key::Escape => {
                            let mut editing = editing;
                            editing.set(None);
                        }
                        _ => {}
                    }
                },
            }
        }
    } else {
        rsx! {
            button {
                class: "cell-value",
                id: "cell-btn-{deal_id}-{column.as_str()}",
                onclick: {
                    let deal_id = deal_id.clone();
                    let value = value.clone();
                    let mut editing = editing;
                    move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        editing.set(Some(EditingCell {
                            deal_id: deal_id.clone(),
                            column,
                            draft: value.clone(),
                        }));
                    }
                },
                if value.is_empty() {
                    span { class: "cell-empty", "\u{2014}" }
                } else {
                    "{value}"
                }
            }
        }
    }
}

/// Currency editor. The draft is seeded with the formatted value;
/// commas and spaces are stripped on commit, and input that does not
/// parse leaves the stored amount untouched.
#[component]
pub fn AmountCell(
    deals: Signal<Vec<Deal>>,
    editing: Signal<Option<EditingCell>>,
    deal_id: String,
    amount: f64,
) -> Element {
    if is_editing(&editing, &deal_id, ColumnId::Amount) {
        rsx! {
            input {
                class: "cell-input cell-input-amount",
                id: "cell-input-{deal_id}-amount",
                inputmode: "numeric",
                value: "{current_draft(&editing)}",
                autofocus: true,
                oninput: move |evt| {
                    let value = evt.value();
                    let mut editing = editing;
                    editing.with_mut(|cell| {
                        if let Some(cell) = cell {
                            cell.draft = value;
                        }
                    });
                },
                onblur: move |_| {
                    commit_amount(deals, editing);
                },
                onkeydown: move |evt| {
                    evt.stop_propagation();
                    match evt.key() {
                        Key::Enter => commit_amount(deals, editing),
                        Key::Escape => {
                            let mut editing = editing;
                            editing.set(None);
                        }
                        _ => {}
                    }
                },
            }
        }
    } else {
        rsx! {
            button {
                class: "cell-value cell-amount",
                id: "cell-btn-{deal_id}-amount",
                onclick: {
                    let deal_id = deal_id.clone();
                    let mut editing = editing;
                    move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        editing.set(Some(EditingCell {
                            deal_id: deal_id.clone(),
                            column: ColumnId::Amount,
                            draft: deal::format_amount(amount),
                        }));
                    }
                },
                "\u{20B9} {deal::format_amount(amount)}"
            }
        }
    }
}

/// Stage editor: a pill that opens an enumerated dropdown. Picking an
/// option commits immediately; Escape or clicking the pill again
/// closes without committing.
#[component]
pub fn StageCell(
    deals: Signal<Vec<Deal>>,
    editing: Signal<Option<EditingCell>>,
    deal_id: String,
    stage: Stage,
) -> Element {
    let open = is_editing(&editing, &deal_id, ColumnId::Stage);

    rsx! {
        div { class: "stage-cell",
            button {
                class: "status-pill {stage.css_class()}",
                id: "stage-btn-{deal_id}",
                aria_expanded: open,
                onclick: {
                    let deal_id = deal_id.clone();
                    let mut editing = editing;
                    move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        if open {
                            editing.set(None);
                        } else {
                            editing.set(Some(EditingCell {
                                deal_id: deal_id.clone(),
                                column: ColumnId::Stage,
                                draft: String::new(),
                            }));
                        }
                    }
                },
                "{stage.label()} \u{25BE}"
            }
            if open {
                ul {
                    class: "stage-menu",
                    role: "listbox",
                    tabindex: "-1",
                    onkeydown: move |evt| {
                        evt.stop_propagation();
                        if evt.key() == Key::Escape {
                            let mut editing = editing;
                            editing.set(None);
                        }
                    },
                    for option in Stage::ALL {
                        li { key: "{option.label()}",
                            button {
                                class: "stage-option",
                                role: "option",
                                aria_selected: option == stage,
                                onclick: {
                                    let deal_id = deal_id.clone();
                                    let mut deals = deals;
                                    let mut editing = editing;
                                    move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        deals.with_mut(|records| {
                                            deal::apply_edit(records, &deal_id, DealEdit::Stage(option));
                                        });
                                        editing.set(None);
                                    }
                                },
                                "{option.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn commit_text(mut deals: Signal<Vec<Deal>>, mut editing: Signal<Option<EditingCell>>) {
    let edit = editing.read().as_ref().cloned();
    if let Some(cell) = edit {
        if let Some(field_edit) = text_edit_for(cell.column, &cell.draft) {
            deals.with_mut(|records| {
                deal::apply_edit(records, &cell.deal_id, field_edit);
            });
        }
    }
    editing.set(None);
}

fn commit_amount(mut deals: Signal<Vec<Deal>>, mut editing: Signal<Option<EditingCell>>) {
    let edit = editing.read().as_ref().cloned();
    if let Some(cell) = edit {
        if let Some(value) = deal::parse_amount(&cell.draft) {
            deals.with_mut(|records| {
                deal::apply_edit(records, &cell.deal_id, DealEdit::Amount(value));
            });
        }
    }
    editing.set(None);
}

/// Map a committed text draft onto the edit for its column. Status
/// text must name a known status; anything else keeps the old value.
fn text_edit_for(column: ColumnId, draft: &str) -> Option<DealEdit> {
    match column {
        ColumnId::Company => Some(DealEdit::Company(draft.to_string())),
        ColumnId::Owner => Some(DealEdit::Owner(draft.to_string())),
        ColumnId::Status => Status::from_label(draft).map(DealEdit::Status),
        ColumnId::Created => Some(DealEdit::Created(draft.to_string())),
        ColumnId::Notes => {
            let trimmed = draft.trim();
            Some(DealEdit::Notes(
                (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ))
        }
        ColumnId::Stage | ColumnId::Amount => None,
    }
}
