pub mod actions;
pub mod app;
pub mod cells;
pub mod context_menu;
pub mod table;
pub mod toolbar;
