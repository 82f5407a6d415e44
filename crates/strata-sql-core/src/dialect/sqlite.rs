//! SQLite dialect.

use super::{Dialect, PlaceholderStyle};
use crate::value::SqlValue;

/// SQLite dialect.
///
/// SQLite has no boolean type, so booleans are inlined as `1`/`0`. Its
/// `REGEXP` operator only works when the host registers a `regexp()`
/// function, so the regex family is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered {
            prefix: "$",
            first: 1,
        }
    }

    fn inline_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Bool(b) => String::from(if *b { "1" } else { "0" }),
            _ => value.to_sql_inline(),
        }
    }
}
