//! Domain models for the users table. `User` mirrors the JSON objects served by
//! the users endpoint, and `Column` describes how each field is presented in
//! the table screen.

use std::fmt;

use serde::Deserialize;

use crate::table::{FieldValue, Record};

/// One user as returned by the remote endpoint. Only the fields shown in the
/// table are decoded; anything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub phone: String,
}

impl Record for User {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match Column::from_field(name) {
            Some(column) => self.value(column),
            None => FieldValue::Missing,
        }
    }
}

impl User {
    /// Typed accessor used by both filtering and rendering.
    pub fn value(&self, column: Column) -> FieldValue<'_> {
        match column {
            Column::Id => FieldValue::Int(self.id),
            Column::Email => FieldValue::Text(&self.email),
            Column::Username => FieldValue::Text(&self.username),
            Column::Name => FieldValue::Text(&self.name),
            Column::Phone => FieldValue::Text(&self.phone),
        }
    }
}

/// Columns of the users table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Email,
    Username,
    Name,
    Phone,
}

impl Column {
    pub const COUNT: usize = 5;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Id,
        Column::Email,
        Column::Username,
        Column::Name,
        Column::Phone,
    ];

    /// Record field backing this column.
    pub fn field(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Email => "email",
            Column::Username => "username",
            Column::Name => "name",
            Column::Phone => "phone",
        }
    }

    /// Header label shown above the column.
    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "Identifier",
            Column::Email => "Email",
            Column::Username => "Username",
            Column::Name => "Name",
            Column::Phone => "Phone",
        }
    }

    pub fn from_field(field: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|column| column.field() == field)
    }

    /// Zero-based position in [`Column::ALL`].
    pub fn index(self) -> usize {
        Column::ALL
            .iter()
            .position(|column| *column == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
