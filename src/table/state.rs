use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::filter::Filters;
use super::record::Record;
use super::view::view;

/// Zero-argument callable that sets one particular sort key.
pub type SortTrigger = Box<dyn Fn()>;

/// Sort state for one table, plus the operations a screen needs to drive it.
///
/// The sort key is shared with every trigger handed out by
/// [`TableState::create_sort_by`], so a trigger fired from an input handler is
/// visible on the next call to [`TableState::rows`]. The state is meant for a
/// single UI thread and is neither `Send` nor `Sync`. Clones share the key.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    sort_key: Rc<RefCell<Option<String>>>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sort key, if any.
    pub fn sort_key(&self) -> Option<String> {
        self.sort_key.borrow().clone()
    }

    /// Sort ascending by `field` from now on.
    pub fn sort_by(&self, field: impl Into<String>) {
        set_sort_key(&self.sort_key, Some(field.into()));
    }

    /// Go back to source order.
    pub fn clear_sort(&self) {
        set_sort_key(&self.sort_key, None);
    }

    /// Return a trigger that calls [`TableState::sort_by`] with `field`.
    pub fn create_sort_by(&self, field: impl Into<String>) -> SortTrigger {
        let shared = Rc::clone(&self.sort_key);
        let field = field.into();
        Box::new(move || set_sort_key(&shared, Some(field.clone())))
    }

    /// The current view of `rows` under `filters` and the current sort key.
    pub fn rows<'a, R: Record>(&self, rows: &'a [R], filters: &Filters) -> Vec<&'a R> {
        let key = self.sort_key.borrow();
        view(rows, filters, key.as_deref())
    }
}

fn set_sort_key(slot: &RefCell<Option<String>>, key: Option<String>) {
    debug!("sort key set to {key:?}");
    *slot.borrow_mut() = key;
}
