//! Desktop deals table: sortable, filterable, editable records with
//! per-user view preferences persisted between sessions.

pub mod io;
pub mod state;
pub mod ui;
