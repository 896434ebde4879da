use super::filter::Filters;
use super::record::Record;

/// Build the view of `rows`: sorted ascending by `sort_key` (if any), then
/// filtered by `filters`.
///
/// The source slice is never reordered. The returned vector is rebuilt on every
/// call and borrows the records it keeps.
pub fn view<'a, R: Record>(
    rows: &'a [R],
    filters: &Filters,
    sort_key: Option<&str>,
) -> Vec<&'a R> {
    let mut sorted: Vec<&'a R> = rows.iter().collect();
    if let Some(key) = sort_key {
        sort_rows(&mut sorted, key);
    }
    sorted.retain(|row| filters.matches(*row));
    sorted
}

/// Stable ascending sort on a single field. Equal keys keep their order.
pub fn sort_rows<R: Record>(rows: &mut [R], key: &str) {
    rows.sort_by(|a, b| a.field(key).compare(&b.field(key)));
}
