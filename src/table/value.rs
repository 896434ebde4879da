//! Runtime field values extracted from records.
//!
//! A [`FieldValue`] borrows from the record it was read from. It knows how to
//! render itself as text for substring filtering and how to order itself
//! against another value for sorting.

use std::borrow::Cow;
use std::cmp::Ordering;

/// Value of a single field, borrowed from the source record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Text value.
    Text(&'a str),
    /// Signed integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Field absent from the record, or null.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Returns `true` if the field was absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Text form used by filters. Missing fields render as empty text.
    pub fn to_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Int(n) => Cow::Owned(n.to_string()),
            FieldValue::Float(n) => Cow::Owned(n.to_string()),
            FieldValue::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
            FieldValue::Missing => Cow::Borrowed(""),
        }
    }

    /// Natural ascending order between two values.
    ///
    /// Text compares by code point and numbers compare numerically, including
    /// integers against floats. Missing values compare as empty text. Values
    /// of different kinds order as `Bool < number < text`, which keeps this a
    /// total order.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self.normalized(), other.normalized()) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(&b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(&b),
            (FieldValue::Int(a), FieldValue::Float(b)) => compare_int_float(a, b),
            (FieldValue::Float(a), FieldValue::Int(b)) => compare_int_float(b, a).reverse(),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(&b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }

    fn normalized(self) -> FieldValue<'a> {
        match self {
            FieldValue::Missing => FieldValue::Text(""),
            other => other,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) | FieldValue::Missing => 2,
        }
    }
}

/// Exact order between an integer and a float. Rounding the integer alone
/// collapses neighbours above 2^53, so ties are settled on the integer value.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    match (int as f64).total_cmp(&float) {
        Ordering::Equal if float.is_finite() => i128::from(int).cmp(&(float as i128)),
        other => other,
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Missing, Into::into)
    }
}
