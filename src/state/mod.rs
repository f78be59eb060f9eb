pub mod columns;
pub mod deal;
pub mod drag;
pub mod nav;
pub mod prefs;
pub mod view;
