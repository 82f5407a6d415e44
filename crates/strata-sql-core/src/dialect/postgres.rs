//! PostgreSQL dialect.

use super::{Dialect, PlaceholderStyle};
use crate::ast::BinaryOp;
use crate::value::{self, SqlValue};

/// PostgreSQL dialect.
///
/// - Parameters are numbered: `$1`, `$2`, ... one per literal, in order.
/// - Supports the POSIX regex operators `~`, `~*`, `!~`, `!~*` and `ILIKE`.
/// - Blobs are written as `bytea` hex strings (`'\x0A0B'`).
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered {
            prefix: "$",
            first: 1,
        }
    }

    fn binary_operator(&self, op: BinaryOp) -> Option<&'static str> {
        match op {
            BinaryOp::Regex => Some("~"),
            BinaryOp::IRegex => Some("~*"),
            BinaryOp::NotRegex => Some("!~"),
            BinaryOp::NotIRegex => Some("!~*"),
            BinaryOp::ILike => Some("ILIKE"),
            BinaryOp::NotILike => Some("NOT ILIKE"),
            _ => op.standard_token(),
        }
    }

    fn inline_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Blob(bytes) => format!("'\\x{}'", value::hex(bytes)),
            _ => value.to_sql_inline(),
        }
    }
}
