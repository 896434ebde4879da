//! Sortable, filterable tables over in-memory records, plus a terminal demo
//! that shows a remote users list through them.
//!
//! [`table`] is the reusable part: a pure sort/filter transform and the
//! [`TableState`] that owns a screen's sort key. The remaining modules wire it
//! to an HTTP source and a Ratatui screen.
pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod table;
pub mod ui;

/// Remote data access used by the binary to fill the table.
pub use api::{ApiError, UserSource, UsersClient};

pub use config::{Config, ConfigError};
pub use logging::init_logging;
pub use models::{Column, User};
pub use table::{view, FieldValue, Filters, Record, TableState};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
