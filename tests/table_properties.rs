//! Property-based tests for the sort/filter transform using proptest.

use std::cmp::Ordering;

use proptest::prelude::*;
use user_table::table::{view, FieldValue, Filters, Record};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    value: i64,
    name: String,
}

impl Record for Item {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "value" => FieldValue::Int(self.value),
            "name" => FieldValue::Text(&self.name),
            _ => FieldValue::Missing,
        }
    }
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (-50i64..50, "[a-c]{0,4}").prop_map(|(value, name)| Item { value, name })
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..40)
}

fn sort_key_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("value")), Just(Some("name"))]
}

fn filters_strategy() -> impl Strategy<Value = Filters> {
    ("[a-c]{0,2}", "-?[0-9]{0,1}")
        .prop_map(|(name, value)| Filters::new().with("name", name).with("value", value))
}

/// Multiset equality via sorting on both fields.
fn same_elements(a: &[&Item], b: &[Item]) -> bool {
    let mut left: Vec<(i64, String)> = a.iter().map(|i| (i.value, i.name.clone())).collect();
    let mut right: Vec<(i64, String)> = b.iter().map(|i| (i.value, i.name.clone())).collect();
    left.sort();
    right.sort();
    left == right
}

proptest! {
    /// Without filters the view is the input, reordered only by the sort key.
    #[test]
    fn no_filters_keeps_every_row(items in items_strategy(), key in sort_key_strategy()) {
        let out = view(&items, &Filters::new(), key);
        prop_assert!(same_elements(&out, &items));
        if key.is_none() {
            let expected: Vec<&Item> = items.iter().collect();
            prop_assert_eq!(out, expected);
        }
    }

    /// Empty fragments on every field never drop or duplicate rows.
    #[test]
    fn empty_fragments_keep_every_row(items in items_strategy(), key in sort_key_strategy()) {
        let filters = Filters::new().with("name", "").with("value", "");
        let out = view(&items, &filters, key);
        prop_assert_eq!(out.len(), items.len());
        prop_assert!(same_elements(&out, &items));
    }

    /// Every row in the view contains each fragment in the matching field.
    #[test]
    fn every_row_satisfies_every_filter(
        items in items_strategy(),
        filters in filters_strategy(),
        key in sort_key_strategy(),
    ) {
        for row in view(&items, &filters, key) {
            for (field, fragment) in filters.iter() {
                prop_assert!(row.field(field).to_text().contains(fragment));
            }
        }
    }

    /// Filtering never invents rows and never drops a matching one.
    #[test]
    fn view_is_exactly_the_matching_rows(items in items_strategy(), filters in filters_strategy()) {
        let out = view(&items, &filters, None);
        let expected: Vec<&Item> = items.iter().filter(|item| filters.matches(*item)).collect();
        prop_assert_eq!(out, expected);
    }

    /// A sort key yields a non-decreasing sequence on that key.
    #[test]
    fn sorted_view_is_non_decreasing(items in items_strategy(), filters in filters_strategy()) {
        for key in ["value", "name"] {
            let out = view(&items, &filters, Some(key));
            for pair in out.windows(2) {
                prop_assert_ne!(pair[0].field(key).compare(&pair[1].field(key)), Ordering::Greater);
            }
        }
    }

    /// Re-sorting by a second key leaves no trace of the first ordering.
    #[test]
    fn resorting_replaces_previous_order(items in items_strategy()) {
        let direct = view(&items, &Filters::new(), Some("value"));
        let by_name: Vec<Item> = view(&items, &Filters::new(), Some("name"))
            .into_iter()
            .cloned()
            .collect();
        let resorted = view(&by_name, &Filters::new(), Some("value"));

        let direct_values: Vec<i64> = direct.iter().map(|i| i.value).collect();
        let resorted_values: Vec<i64> = resorted.iter().map(|i| i.value).collect();
        prop_assert_eq!(direct_values, resorted_values);
    }

    /// Ties on the sort key keep their source order.
    #[test]
    fn sort_is_stable(items in items_strategy()) {
        let indexed: Vec<(usize, &Item)> = items.iter().enumerate().collect();
        let out = view(&items, &Filters::new(), Some("value"));
        let positions: Vec<usize> = out
            .iter()
            .map(|row| indexed.iter().find(|(_, item)| std::ptr::eq(*item, *row)).map(|(i, _)| *i).unwrap())
            .collect();
        for pair in positions.windows(2) {
            let (a, b) = (&items[pair[0]], &items[pair[1]]);
            if a.value == b.value {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    /// Same inputs, same output.
    #[test]
    fn transform_is_idempotent(
        items in items_strategy(),
        filters in filters_strategy(),
        key in sort_key_strategy(),
    ) {
        prop_assert_eq!(view(&items, &filters, key), view(&items, &filters, key));
    }
}
