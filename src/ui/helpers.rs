use anyhow::Error;
use ratatui::layout::Constraint;

use crate::models::Column;

/// Marker appended to the header of the sorted column.
const SORT_MARKER: &str = " ▲";

/// Header text for a column: its shortcut digit, label, and sort marker.
pub(crate) fn header_label(column: Column, sorted: bool) -> String {
    let marker = if sorted { SORT_MARKER } else { "" };
    format!("{} {}{}", column.index() + 1, column.label(), marker)
}

/// Relative widths for the table columns. The identifier stays narrow.
pub(crate) fn column_constraints() -> [Constraint; Column::COUNT] {
    Column::ALL.map(|column| match column {
        Column::Id => Constraint::Length(14),
        Column::Email => Constraint::Fill(3),
        Column::Username => Constraint::Fill(2),
        Column::Name => Constraint::Fill(3),
        Column::Phone => Constraint::Fill(3),
    })
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
