use dioxus::prelude::{Key, *};

use crate::state::columns::ColumnId;

/// Everything a menu entry can do, with its target baked in.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction {
    OpenDetails(String),
    DuplicateDeal(String),
    DeleteDeal(String),
    ToggleColumnHidden(ColumnId),
    AutosizeColumn(ColumnId),
    SortAscending(ColumnId),
    SortDescending(ColumnId),
    ClearSort(ColumnId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
    pub shortcut: Option<&'static str>,
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> MenuItem {
        MenuItem {
            label: label.into(),
            action,
            shortcut: None,
            disabled: false,
        }
    }

    pub fn with_shortcut(mut self, shortcut: &'static str) -> MenuItem {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn disabled_when(mut self, disabled: bool) -> MenuItem {
        self.disabled = disabled;
        self
    }
}

/// An open context menu: viewport position plus the items to show.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuState {
    pub x: f64,
    pub y: f64,
    pub items: Vec<MenuItem>,
}

impl MenuState {
    pub fn at(x: f64, y: f64, items: Vec<MenuItem>) -> MenuState {
        MenuState { x, y, items }
    }
}

/// Floating menu with a full-viewport backdrop. Any press on the
/// backdrop, a right-click included, dismisses without selecting;
/// Escape does the same while the menu holds focus.
#[component]
pub fn ContextMenu(
    x: f64,
    y: f64,
    items: Vec<MenuItem>,
    onselect: EventHandler<MenuAction>,
    onclose: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "menu-backdrop",
            onmousedown: move |_| onclose.call(()),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                onclose.call(());
            },
        }
        div {
            class: "context-menu",
            id: "context-menu",
            style: "left: {x}px; top: {y}px;",
            role: "menu",
            tabindex: "-1",
            autofocus: true,
            onkeydown: move |evt| {
                evt.stop_propagation();
                if evt.key() == Key::Escape {
                    onclose.call(());
                }
            },
            for (index, item) in items.iter().enumerate() {
                button {
                    key: "{index}",
                    class: "menu-item",
                    role: "menuitem",
                    disabled: item.disabled,
                    onclick: {
                        let action = item.action.clone();
                        let disabled = item.disabled;
                        move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            if !disabled {
                                onselect.call(action.clone());
                            }
                        }
                    },
                    span { class: "menu-label", "{item.label}" }
                    if let Some(shortcut) = item.shortcut {
                        kbd { class: "menu-shortcut", "{shortcut}" }
                    }
                }
            }
        }
    }
}
