use dioxus::prelude::{Key, Modifiers, *};

use std::collections::BTreeSet;

use crate::state::columns::{ColumnId, EditorKind, FilterKind, AUTOSIZE_WIDTH};
use crate::state::deal::{self, Deal, DealEdit, Stage, Status};
use crate::state::drag::{DragState, ReorderDrag, ResizeDrag};
use crate::state::nav::{FocusCoord, NavDirection};
use crate::state::prefs::UiPrefs;
use crate::state::view;
use crate::ui::actions;
use crate::ui::cells::{AmountCell, EditingCell, StageCell, TextCell};
use crate::ui::context_menu::{ContextMenu, MenuAction, MenuItem, MenuState};

#[component]
pub fn DealsTable(
    deals: Signal<Vec<Deal>>,
    prefs: Signal<UiPrefs>,
    expanded: Signal<BTreeSet<String>>,
    editing: Signal<Option<EditingCell>>,
    focus: Signal<FocusCoord>,
    menu: Signal<Option<MenuState>>,
    drag: Signal<Option<DragState>>,
) -> Element {
    let deals_snapshot = deals.read().clone();
    let prefs_snapshot = prefs.read().clone();
    let columns = view::visible_columns(&prefs_snapshot);
    let visible = view::visible_row_indices(&deals_snapshot, &prefs_snapshot);
    let totals = view::totals(&deals_snapshot);
    let all_selected =
        view::all_visible_selected(&deals_snapshot, &visible, &prefs_snapshot.selection);
    let visible_ids = view::visible_ids(&deals_snapshot, &visible);
    let row_count = visible.len();
    let col_count = columns.len();
    // Full row width: data columns plus the select and expander gutters.
    let span_all = col_count + 2;

    let nav_visible = visible.clone();
    let nav_columns = columns.clone();

    rsx! {
        div {
            class: "table-container",
            id: "table-container",
            tabindex: "0",
            onkeydown: move |evt| {
                match evt.key() {
                    Key::ArrowUp => {
                        evt.prevent_default();
                        move_focus(focus, NavDirection::Up, row_count, col_count);
                    }
                    Key::ArrowDown => {
                        evt.prevent_default();
                        move_focus(focus, NavDirection::Down, row_count, col_count);
                    }
                    Key::ArrowLeft => {
                        evt.prevent_default();
                        move_focus(focus, NavDirection::Left, row_count, col_count);
                    }
                    Key::ArrowRight => {
                        evt.prevent_default();
                        move_focus(focus, NavDirection::Right, row_count, col_count);
                    }
                    Key::Enter => {
                        begin_focused_edit(deals, editing, *focus.read(), &nav_visible, &nav_columns);
                    }
                    Key::Escape => {
                        let mut menu = menu;
                        let mut editing = editing;
                        if menu.read().is_some() {
                            menu.set(None);
                        } else {
                            editing.set(None);
                        }
                    }
                    _ => {}
                }
            },
            table {
                thead {
                    tr {
                        th { class: "select-col",
                            input {
                                r#type: "checkbox",
                                id: "select-all",
                                checked: all_selected,
                                onchange: {
                                    let ids = visible_ids.clone();
                                    let mut prefs = prefs;
                                    move |_| {
                                        let select = !all_selected;
                                        prefs.with_mut(|prefs| {
                                            prefs.set_selected(ids.iter().cloned(), select);
                                        });
                                    }
                                },
                            }
                        }
                        for (col_pos, (col, width)) in columns.iter().copied().enumerate() {
                            th {
                                key: "{col.as_str()}",
                                class: header_class(col, &prefs_snapshot),
                                id: "col-{col.as_str()}",
                                style: "width: {width}px; min-width: {width}px;",
                                oncontextmenu: {
                                    let mut menu = menu;
                                    move |evt: Event<MouseData>| {
                                        evt.prevent_default();
                                        let point = evt.client_coordinates();
                                        let items = column_menu_items(col, &prefs.read());
                                        menu.set(Some(MenuState::at(point.x, point.y, items)));
                                    }
                                },
                                div { class: "header-cell",
                                    span {
                                        class: "reorder-grip",
                                        title: "Drag to reorder",
                                        onmousedown: {
                                            let mut drag = drag;
                                            move |evt: Event<MouseData>| {
                                                evt.prevent_default();
                                                let x = evt.client_coordinates().x;
                                                drag.set(Some(DragState::Reorder(ReorderDrag::begin(x, col_pos))));
                                            }
                                        },
                                        "\u{2630}"
                                    }
                                    button {
                                        class: "sort-toggle",
                                        id: "sort-{col.as_str()}",
                                        title: "Click to sort, Shift+Click to multi-sort",
                                        onclick: {
                                            let mut prefs = prefs;
                                            move |evt: Event<MouseData>| {
                                                let multi = evt.modifiers().contains(Modifiers::SHIFT);
                                                prefs.with_mut(|prefs| prefs.toggle_sort(col, multi));
                                            }
                                        },
                                        span { class: "header-label", "{col.label()}" }
                                        span { class: "sort-indicator", "{sort_indicator(col, &prefs_snapshot)}" }
                                    }
                                    button {
                                        class: "menu-toggle",
                                        id: "menu-{col.as_str()}",
                                        title: "Column menu",
                                        onclick: {
                                            let mut menu = menu;
                                            move |evt: Event<MouseData>| {
                                                evt.stop_propagation();
                                                let point = evt.client_coordinates();
                                                let items = column_menu_items(col, &prefs.read());
                                                menu.set(Some(MenuState::at(point.x, point.y, items)));
                                            }
                                        },
                                        "\u{22EE}"
                                    }
                                }
                                if col.filter() == FilterKind::Exact {
                                    select {
                                        class: "header-filter",
                                        id: "filter-{col.as_str()}",
                                        value: "{prefs_snapshot.filter(col).unwrap_or_default()}",
                                        onchange: {
                                            let mut prefs = prefs;
                                            move |evt: Event<FormData>| {
                                                let value = evt.value();
                                                prefs.with_mut(|prefs| prefs.set_filter(col, value));
                                            }
                                        },
                                        option { value: "", "All" }
                                        for label in exact_filter_options(col) {
                                            option { value: "{label}", "{label}" }
                                        }
                                    }
                                }
                                div {
                                    class: "col-resizer",
                                    onmousedown: {
                                        let mut drag = drag;
                                        move |evt: Event<MouseData>| {
                                            evt.prevent_default();
                                            evt.stop_propagation();
                                            let x = evt.client_coordinates().x;
                                            drag.set(Some(DragState::Resize(ResizeDrag::begin(col, x, width))));
                                        }
                                    },
                                }
                            }
                        }
                        th { class: "expander-col" }
                    }
                }
                tbody {
                    for (row_pos, deal_index) in visible.iter().enumerate() {
                        if let Some(row_deal) = deals_snapshot.get(*deal_index) {
                            DealRow {
                                key: "{row_deal.id}",
                                deal: row_deal.clone(),
                                row_pos,
                                columns: columns.clone(),
                                deals,
                                prefs,
                                expanded,
                                editing,
                                focus,
                                menu,
                            }
                        }
                    }
                    if visible.is_empty() {
                        tr { class: "empty-row",
                            td { colspan: "{span_all}", "No deals match the current filters." }
                        }
                    }
                }
                tfoot {
                    tr { class: "totals-row",
                        td { colspan: "{span_all}",
                            span { id: "total-count", "Total deals: {totals.count}" }
                            span { id: "total-sum", "\u{20B9} {deal::format_amount(totals.sum)}" }
                            span { id: "total-avg", "Avg: \u{20B9} {deal::format_amount(totals.avg.round())}" }
                        }
                    }
                }
            }
        }
        div { class: "table-footer",
            span { class: "hint",
                "Right-click headers or rows for menus \u{2022} Shift+click to multi-sort \u{2022} Drag the grip to reorder, the edge to resize"
            }
            button {
                class: "toolbar-btn",
                id: "btn-reset",
                onclick: move |_| actions::reset(deals, prefs, expanded, editing, focus),
                "\u{21BA} Reset view & data"
            }
        }
        if drag.read().is_some() {
            div {
                class: "drag-overlay",
                id: "drag-overlay",
                onmousemove: move |evt| {
                    let x = evt.client_coordinates().x;
                    let current = *drag.read();
                    match current {
                        Some(DragState::Resize(resize)) => {
                            let mut prefs = prefs;
                            prefs.with_mut(|prefs| prefs.set_width(resize.column, resize.width_at(x)));
                        }
                        Some(DragState::Reorder(mut reorder)) => {
                            if let Some((from, to)) = reorder.update(x, col_count) {
                                let mut prefs = prefs;
                                let mut drag = drag;
                                prefs.with_mut(|prefs| {
                                    prefs.move_visible_column(from, to);
                                });
                                drag.set(Some(DragState::Reorder(reorder)));
                            }
                        }
                        None => {}
                    }
                },
                onmouseup: move |_| {
                    let mut drag = drag;
                    drag.set(None);
                },
                onmouseleave: move |_| {
                    let mut drag = drag;
                    drag.set(None);
                },
            }
        }
        if let Some(state) = menu.read().clone() {
            ContextMenu {
                x: state.x,
                y: state.y,
                items: state.items,
                onselect: move |action| {
                    let mut menu = menu;
                    menu.set(None);
                    apply_menu_action(action, deals, prefs, expanded);
                },
                onclose: move |_| {
                    let mut menu = menu;
                    menu.set(None);
                },
            }
        }
    }
}

#[component]
fn DealRow(
    deal: Deal,
    row_pos: usize,
    columns: Vec<(ColumnId, f64)>,
    deals: Signal<Vec<Deal>>,
    prefs: Signal<UiPrefs>,
    expanded: Signal<BTreeSet<String>>,
    editing: Signal<Option<EditingCell>>,
    focus: Signal<FocusCoord>,
    menu: Signal<Option<MenuState>>,
) -> Element {
    let is_selected = prefs.read().is_selected(&deal.id);
    let is_expanded = expanded.read().contains(&deal.id);
    let focus_coord = *focus.read();
    let span_all = columns.len() + 2;

    let mut row_class = if row_pos % 2 == 0 { "even" } else { "odd" }.to_string();
    if is_selected {
        row_class.push_str(" selected-row");
    }

    rsx! {
        tr {
            class: "{row_class}",
            id: "row-{deal.id}",
            onclick: {
                let id = deal.id.clone();
                let mut prefs = prefs;
                move |_| {
                    prefs.with_mut(|prefs| prefs.toggle_selected(&id));
                }
            },
            oncontextmenu: {
                let id = deal.id.clone();
                let mut menu = menu;
                move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    let point = evt.client_coordinates();
                    menu.set(Some(MenuState::at(point.x, point.y, row_menu_items(&id))));
                }
            },
            td { class: "select-col",
                input {
                    r#type: "checkbox",
                    id: "select-{deal.id}",
                    checked: is_selected,
                    aria_label: "Select {deal.company}",
                    onclick: move |evt| evt.stop_propagation(),
                    onchange: {
                        let id = deal.id.clone();
                        let mut prefs = prefs;
                        move |_| {
                            prefs.with_mut(|prefs| prefs.toggle_selected(&id));
                        }
                    },
                }
            }
            for (col_pos, (col, width)) in columns.iter().copied().enumerate() {
                td {
                    key: "{col.as_str()}",
                    class: cell_class(row_pos, col_pos, focus_coord),
                    id: "cell-{deal.id}-{col.as_str()}",
                    style: "width: {width}px; min-width: {width}px;",
                    {cell_editor(&deal, col, deals, editing)}
                }
            }
            td { class: "expander-col",
                button {
                    class: "expander-btn",
                    id: "expand-{deal.id}",
                    title: if is_expanded { "Collapse details" } else { "Expand details" },
                    onclick: {
                        let id = deal.id.clone();
                        let mut expanded = expanded;
                        move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            expanded.with_mut(|expanded| {
                                if !expanded.insert(id.clone()) {
                                    expanded.remove(&id);
                                }
                            });
                        }
                    },
                    if is_expanded { "\u{25BC}" } else { "\u{25B6}" }
                }
            }
        }
        if is_expanded {
            tr { class: "details-row", id: "details-row-{deal.id}",
                td { colspan: "{span_all}",
                    DealDetails { deal: deal.clone(), deals }
                }
            }
        }
    }
}

/// Expanded panel under a row: read-only field summary plus a notes
/// editor that commits on blur.
#[component]
fn DealDetails(deal: Deal, deals: Signal<Vec<Deal>>) -> Element {
    let mut notes_draft = use_signal(|| deal.notes.clone().unwrap_or_default());
    let close_date = deal
        .close_date
        .clone()
        .unwrap_or_else(|| "\u{2014}".to_string());

    rsx! {
        div { class: "row-details", id: "details-{deal.id}",
            div { class: "details-title", "Details for {deal.company}" }
            div { class: "details-grid",
                div { class: "details-field",
                    span { class: "details-label", "Deal ID" }
                    span { class: "details-value", "{deal.id}" }
                }
                div { class: "details-field",
                    span { class: "details-label", "Owner" }
                    span { class: "details-value", "{deal.owner}" }
                }
                div { class: "details-field",
                    span { class: "details-label", "Stage" }
                    span { class: "details-value", "{deal.stage.label()}" }
                }
                div { class: "details-field",
                    span { class: "details-label", "Amount" }
                    span { class: "details-value", "\u{20B9} {deal::format_amount(deal.amount)}" }
                }
                div { class: "details-field",
                    span { class: "details-label", "Created" }
                    span { class: "details-value", "{deal.created}" }
                }
                div { class: "details-field",
                    span { class: "details-label", "Close Date" }
                    span { class: "details-value", "{close_date}" }
                }
            }
            label { class: "details-label", r#for: "notes-{deal.id}", "Notes" }
            textarea {
                class: "details-notes",
                id: "notes-{deal.id}",
                value: "{notes_draft}",
                oninput: move |evt| notes_draft.set(evt.value()),
                onblur: {
                    let id = deal.id.clone();
                    let mut deals = deals;
                    move |_| {
                        let text = notes_draft.read().trim().to_string();
                        let notes = (!text.is_empty()).then_some(text);
                        deals.with_mut(|records| {
                            deal::apply_edit(records, &id, DealEdit::Notes(notes));
                        });
                    }
                },
            }
        }
    }
}

fn cell_editor(
    deal: &Deal,
    column: ColumnId,
    deals: Signal<Vec<Deal>>,
    editing: Signal<Option<EditingCell>>,
) -> Element {
    match column.editor() {
        EditorKind::Text => rsx! {
            TextCell {
                deals,
                editing,
                deal_id: deal.id.clone(),
                column,
                value: view::cell_text(deal, column),
            }
        },
        EditorKind::Currency => rsx! {
            AmountCell {
                deals,
                editing,
                deal_id: deal.id.clone(),
                amount: deal.amount,
            }
        },
        EditorKind::Stage => rsx! {
            StageCell {
                deals,
                editing,
                deal_id: deal.id.clone(),
                stage: deal.stage,
            }
        },
    }
}

fn move_focus(mut focus: Signal<FocusCoord>, direction: NavDirection, rows: usize, cols: usize) {
    let next = focus.read().step(direction, rows, cols);
    focus.set(next);
}

fn begin_focused_edit(
    deals: Signal<Vec<Deal>>,
    mut editing: Signal<Option<EditingCell>>,
    coord: FocusCoord,
    visible: &[usize],
    columns: &[(ColumnId, f64)],
) {
    let Some(&deal_index) = visible.get(coord.row) else {
        return;
    };
    let Some(&(column, _)) = columns.get(coord.col) else {
        return;
    };
    let snapshot = deals.read();
    let Some(deal) = snapshot.get(deal_index) else {
        return;
    };
    let draft = match column.editor() {
        EditorKind::Text => view::cell_text(deal, column),
        EditorKind::Currency => deal::format_amount(deal.amount),
        EditorKind::Stage => String::new(),
    };
    let cell = EditingCell {
        deal_id: deal.id.clone(),
        column,
        draft,
    };
    editing.set(Some(cell));
}

fn header_class(col: ColumnId, prefs: &UiPrefs) -> String {
    match prefs.sort_direction(col) {
        Some(false) => "sortable sorted-asc",
        Some(true) => "sortable sorted-desc",
        None => "sortable",
    }
    .to_string()
}

fn sort_indicator(col: ColumnId, prefs: &UiPrefs) -> &'static str {
    match prefs.sort_direction(col) {
        Some(false) => "\u{2191}",
        Some(true) => "\u{2193}",
        None => "\u{2195}",
    }
}

fn cell_class(row_pos: usize, col_pos: usize, focus: FocusCoord) -> String {
    if focus.row == row_pos && focus.col == col_pos {
        "cell focused".to_string()
    } else {
        "cell".to_string()
    }
}

fn exact_filter_options(col: ColumnId) -> Vec<&'static str> {
    match col {
        ColumnId::Stage => Stage::ALL.iter().map(|stage| stage.label()).collect(),
        ColumnId::Status => Status::ALL.iter().map(|status| status.label()).collect(),
        _ => Vec::new(),
    }
}

fn row_menu_items(id: &str) -> Vec<MenuItem> {
    vec![
        MenuItem::new("Open details", MenuAction::OpenDetails(id.to_string())),
        MenuItem::new("Duplicate", MenuAction::DuplicateDeal(id.to_string())),
        MenuItem::new("Delete", MenuAction::DeleteDeal(id.to_string())).with_shortcut("Del"),
    ]
}

fn column_menu_items(col: ColumnId, prefs: &UiPrefs) -> Vec<MenuItem> {
    let sorted = prefs.sort_direction(col).is_some();
    let mut items = vec![
        MenuItem::new("Hide column", MenuAction::ToggleColumnHidden(col)),
        MenuItem::new("Autosize to fit", MenuAction::AutosizeColumn(col)),
        MenuItem::new("Sort asc", MenuAction::SortAscending(col)).with_shortcut("A"),
        MenuItem::new("Sort desc", MenuAction::SortDescending(col)).with_shortcut("Z"),
        MenuItem::new("Clear sort", MenuAction::ClearSort(col)).disabled_when(!sorted),
    ];
    for hidden in prefs.hidden_columns() {
        items.push(MenuItem::new(
            format!("Show {}", hidden.label()),
            MenuAction::ToggleColumnHidden(hidden),
        ));
    }
    items
}

fn apply_menu_action(
    action: MenuAction,
    deals: Signal<Vec<Deal>>,
    mut prefs: Signal<UiPrefs>,
    mut expanded: Signal<BTreeSet<String>>,
) {
    match action {
        MenuAction::OpenDetails(id) => expanded.with_mut(|expanded| {
            if !expanded.insert(id.clone()) {
                expanded.remove(&id);
            }
        }),
        MenuAction::DuplicateDeal(id) => actions::duplicate_deal(deals, &id),
        MenuAction::DeleteDeal(id) => actions::delete_deal(deals, prefs, expanded, &id),
        MenuAction::ToggleColumnHidden(col) => prefs.with_mut(|prefs| prefs.toggle_hidden(col)),
        MenuAction::AutosizeColumn(col) => {
            prefs.with_mut(|prefs| prefs.set_width(col, AUTOSIZE_WIDTH))
        }
        MenuAction::SortAscending(col) => prefs.with_mut(|prefs| prefs.set_sort(col, false)),
        MenuAction::SortDescending(col) => prefs.with_mut(|prefs| prefs.set_sort(col, true)),
        MenuAction::ClearSort(col) => prefs.with_mut(|prefs| prefs.clear_sort(col)),
    }
}
