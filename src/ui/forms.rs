use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Column;
use crate::table::Filters;

/// Live text inputs, one per column, that drive the table filters.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FilterForm {
    values: [String; Column::COUNT],
    active: usize,
}

impl FilterForm {
    pub(crate) fn active(&self) -> Column {
        Column::ALL[self.active]
    }

    /// Move focus to the next column, wrapping around.
    pub(crate) fn next_field(&mut self) {
        self.active = (self.active + 1) % Column::COUNT;
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = (self.active + Column::COUNT - 1) % Column::COUNT;
    }

    pub(crate) fn value(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    /// Append a character to the active input. Control characters are
    /// rejected.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.values[self.active].push(ch);
        true
    }

    /// Remove the last character from the active input.
    pub(crate) fn backspace(&mut self) -> bool {
        self.values[self.active].pop().is_some()
    }

    /// Empty every input. Returns whether anything changed.
    pub(crate) fn clear(&mut self) -> bool {
        let changed = self.has_input();
        for value in &mut self.values {
            value.clear();
        }
        changed
    }

    pub(crate) fn has_input(&self) -> bool {
        self.values.iter().any(|value| !value.is_empty())
    }

    /// Every column mapped to its current text, empty inputs included.
    pub(crate) fn filters(&self) -> Filters {
        Column::ALL
            .into_iter()
            .map(|column| (column.field(), self.value(column)))
            .collect()
    }

    /// Render the input for `column` as a single table cell line.
    pub(crate) fn build_line(&self, column: Column, editing: bool) -> Line<'static> {
        let value = self.value(column);
        let is_active = editing && self.active() == column;

        let (display, style) = if value.is_empty() {
            let style = if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ("<search>".to_string(), style)
        } else if is_active {
            (value.to_string(), Style::default().fg(Color::Yellow))
        } else {
            (value.to_string(), Style::default().fg(Color::Cyan))
        };

        let mut spans = vec![Span::styled(display, style)];
        if is_active {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_edits_the_focused_column() {
        let mut form = FilterForm::default();
        form.previous_field();
        form.previous_field();
        assert_eq!(form.active(), Column::Name);
        assert!(form.push_char('A'));
        assert!(form.push_char('l'));
        assert!(!form.push_char('\n'));

        assert_eq!(form.value(Column::Name), "Al");
        assert_eq!(form.value(Column::Email), "");

        assert!(form.backspace());
        assert_eq!(form.value(Column::Name), "A");
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = FilterForm::default();
        assert_eq!(form.active(), Column::Id);
        form.previous_field();
        assert_eq!(form.active(), Column::Phone);
        form.next_field();
        assert_eq!(form.active(), Column::Id);
        form.next_field();
        assert_eq!(form.active(), Column::Email);
    }

    #[test]
    fn filters_cover_every_column() {
        let mut form = FilterForm::default();
        form.next_field();
        form.push_char('@');

        let filters = form.filters();
        assert_eq!(filters.len(), Column::COUNT);
        assert_eq!(filters.get("email"), Some("@"));
        assert_eq!(filters.get("phone"), Some(""));
        assert_eq!(filters.active_fields().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn clear_reports_changes() {
        let mut form = FilterForm::default();
        assert!(!form.clear());
        form.push_char('1');
        assert!(form.clear());
        assert!(!form.has_input());
    }
}
