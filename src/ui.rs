//! Ratatui front-end for the users table: a header row with sortable column
//! labels, a row of live filter inputs beneath it, and the filtered view.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
