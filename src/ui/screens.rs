use log::debug;

use crate::models::{Column, User};
use crate::table::{Filters, SortTrigger, TableState};

/// State behind the users table: the fetched rows, the derived view, and the
/// selection inside that view.
pub(crate) struct UsersScreen {
    /// Full backing list as fetched.
    users: Vec<User>,
    /// Rows currently visible, rebuilt whenever users, filters or the sort key
    /// change.
    visible: Vec<User>,
    table: TableState,
    /// One trigger per column, in `Column::ALL` order.
    sort_triggers: Vec<SortTrigger>,
    filters: Filters,
    /// Selected index into `visible`.
    selected: usize,
}

impl UsersScreen {
    pub(crate) fn new(users: Vec<User>) -> Self {
        let table = TableState::new();
        let sort_triggers = Column::ALL
            .into_iter()
            .map(|column| table.create_sort_by(column.field()))
            .collect();

        let mut screen = Self {
            users,
            visible: Vec::new(),
            table,
            sort_triggers,
            filters: Filters::new(),
            selected: 0,
        };
        screen.refresh_view();
        screen
    }

    /// Rebuild `visible` from the current inputs and clamp the selection.
    fn refresh_view(&mut self) {
        self.visible = self
            .table
            .rows(&self.users, &self.filters)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            "view rebuilt: {} of {} users visible",
            self.visible.len(),
            self.users.len()
        );
        self.ensure_in_bounds();
    }

    /// Replace the backing user list and recompute the view.
    pub(crate) fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.refresh_view();
    }

    pub(crate) fn set_filters(&mut self, filters: Filters) {
        if self.filters != filters {
            self.filters = filters;
            self.refresh_view();
        }
    }

    /// Fire the column's sort trigger, as a header click would.
    pub(crate) fn sort_by_column(&mut self, column: Column) {
        if let Some(trigger) = self.sort_triggers.get(column.index()) {
            trigger();
        }
        self.refresh_view();
    }

    pub(crate) fn clear_sort(&mut self) {
        self.table.clear_sort();
        self.refresh_view();
    }

    pub(crate) fn sort_column(&self) -> Option<Column> {
        self.table
            .sort_key()
            .and_then(|key| Column::from_field(&key))
    }

    pub(crate) fn visible(&self) -> &[User] {
        &self.visible
    }

    pub(crate) fn total(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    /// Return the currently highlighted user, if any.
    pub(crate) fn current_user(&self) -> Option<&User> {
        self.visible.get(self.selected)
    }

    /// Move selection by `offset`, clamping to the visible rows.
    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.visible.is_empty() {
            return;
        }
        let len = self.visible.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    /// Keep the selection index within the visible rows.
    fn ensure_in_bounds(&mut self) {
        if self.visible.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.visible.len() {
            self.selected = self.visible.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            email: format!("{}@example.com", name.to_lowercase()),
            username: name.to_lowercase(),
            name: name.to_string(),
            phone: format!("555-000{id}"),
        }
    }

    fn names(screen: &UsersScreen) -> Vec<&str> {
        screen.visible().iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn starts_in_source_order() {
        let screen = UsersScreen::new(vec![user(2, "Bob"), user(1, "Al")]);
        assert_eq!(names(&screen), vec!["Bob", "Al"]);
        assert_eq!(screen.sort_column(), None);
        assert_eq!(screen.total(), 2);
    }

    #[test]
    fn sort_triggers_reorder_the_view() {
        let mut screen = UsersScreen::new(vec![user(2, "Bob"), user(10, "Al"), user(1, "Cy")]);

        screen.sort_by_column(Column::Name);
        assert_eq!(screen.sort_column(), Some(Column::Name));
        assert_eq!(names(&screen), vec!["Al", "Bob", "Cy"]);

        screen.sort_by_column(Column::Id);
        assert_eq!(names(&screen), vec!["Cy", "Bob", "Al"]);

        screen.clear_sort();
        assert_eq!(names(&screen), vec!["Bob", "Al", "Cy"]);
    }

    #[test]
    fn filters_narrow_and_clamp_selection() {
        let mut screen = UsersScreen::new(vec![user(1, "Bob"), user(2, "Al"), user(3, "Alma")]);
        screen.select_last();
        assert_eq!(screen.selected(), 2);

        screen.set_filters(Filters::new().with("name", "Bo"));
        assert_eq!(names(&screen), vec!["Bob"]);
        assert_eq!(screen.selected(), 0);
        assert_eq!(screen.current_user().map(|u| u.id), Some(1));

        screen.set_filters(Filters::new().with("name", "zzz"));
        assert!(screen.current_user().is_none());
    }

    #[test]
    fn selection_is_clamped() {
        let mut screen = UsersScreen::new(vec![user(1, "A"), user(2, "B"), user(3, "C")]);
        screen.move_selection(10);
        assert_eq!(screen.selected(), 2);
        screen.move_selection(-10);
        assert_eq!(screen.selected(), 0);

        let mut empty = UsersScreen::new(Vec::new());
        empty.move_selection(1);
        empty.select_last();
        assert_eq!(empty.selected(), 0);
    }

    #[test]
    fn replacing_users_keeps_sort() {
        let mut screen = UsersScreen::new(vec![user(1, "B")]);
        screen.sort_by_column(Column::Name);
        screen.set_users(vec![user(1, "C"), user(2, "A")]);
        assert_eq!(names(&screen), vec!["A", "C"]);
    }
}
