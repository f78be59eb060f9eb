use dioxus::prelude::*;
use std::collections::BTreeSet;

use tracing::warn;

use crate::io::prefs_io;
use crate::state::deal::{self, Deal};
use crate::state::drag::DragState;
use crate::state::nav::FocusCoord;
use crate::state::prefs::UiPrefs;
use crate::ui::actions;
use crate::ui::cells::EditingCell;
use crate::ui::context_menu::MenuState;
use crate::ui::table::DealsTable;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let deals = use_signal::<Vec<Deal>>(deal::seed_deals);
    let prefs = use_signal(|| match prefs_io::load_prefs() {
        Ok(prefs) => prefs,
        Err(err) => {
            warn!(error = %err, "could not load ui preferences, starting with defaults");
            UiPrefs::default()
        }
    });
    let expanded = use_signal(BTreeSet::<String>::new);
    let editing = use_signal::<Option<EditingCell>>(|| None);
    let focus = use_signal(FocusCoord::default);
    let menu = use_signal::<Option<MenuState>>(|| None);
    let drag = use_signal::<Option<DragState>>(|| None);
    let notice = use_signal::<Option<String>>(|| None);

    // Persist on every preference change. Runs once at mount too,
    // which rewrites the blob that was just loaded.
    use_effect(move || {
        let snapshot = prefs.read();
        if let Err(err) = prefs_io::save_prefs(&snapshot) {
            warn!(error = %err, "could not persist ui preferences");
        }
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            header { class: "page-header",
                h1 { "Deals" }
                button {
                    class: "toolbar-btn",
                    id: "btn-new-deal",
                    onclick: move |_| actions::new_deal(deals),
                    "\u{2795} New deal"
                }
            }
            section { class: "deals-panel",
                Toolbar { prefs, notice }
                DealsTable { deals, prefs, expanded, editing, focus, menu, drag }
            }
            footer { class: "page-footer",
                p { "All changes stay local. View preferences persist per user." }
            }
        }
    }
}
