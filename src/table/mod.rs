//! Sorting and filtering for in-memory tables.
//!
//! The entry point is [`view`], a pure function from records, a [`Filters`]
//! set and an optional sort key to an ordered list of matching records.
//! [`TableState`] owns the sort key for a screen and hands out per-column
//! triggers that change it.

mod filter;
mod record;
mod state;
mod value;
mod view;

pub use filter::Filters;
pub use record::Record;
pub use state::{SortTrigger, TableState};
pub use value::FieldValue;
pub use view::{sort_rows, view};
