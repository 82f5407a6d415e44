//! MySQL dialect.

use super::{Dialect, PlaceholderStyle};
use crate::ast::BinaryOp;
use crate::value::{self, SqlValue};

/// MySQL dialect.
///
/// Identifiers are quoted with backticks and every parameter is a bare `?`.
/// `REGEXP` is case-insensitive under the default collations, so only the
/// plain and negated regex operators have a token. `||` is logical OR unless
/// `PIPES_AS_CONCAT` is set, so concatenation is rejected.
///
/// Backslash is an escape character inside string literals unless
/// `NO_BACKSLASH_ESCAPES` is set, so inlined text doubles it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Unnumbered("?")
    }

    fn binary_operator(&self, op: BinaryOp) -> Option<&'static str> {
        match op {
            BinaryOp::Regex => Some("REGEXP"),
            BinaryOp::NotRegex => Some("NOT REGEXP"),
            BinaryOp::Concat => None,
            _ => op.standard_token(),
        }
    }

    fn inline_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Text(s) => value::quote_text(&s.replace('\\', "\\\\")),
            _ => value.to_sql_inline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_dialect() {
        let dialect = MysqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.identifier_quote(), '`');
        assert_eq!(dialect.placeholder_style().render(5), "?");
    }

    #[test]
    fn test_partial_regex_support() {
        let dialect = MysqlDialect::new();
        assert_eq!(dialect.binary_operator(BinaryOp::Regex), Some("REGEXP"));
        assert_eq!(dialect.binary_operator(BinaryOp::NotRegex), Some("NOT REGEXP"));
        assert_eq!(dialect.binary_operator(BinaryOp::IRegex), None);
        assert_eq!(dialect.binary_operator(BinaryOp::NotIRegex), None);
        assert_eq!(dialect.binary_operator(BinaryOp::Concat), None);
    }

    #[test]
    fn test_inline_text_escapes_backslash() {
        let dialect = MysqlDialect::new();
        let inline = |s: &str| dialect.inline_value(&SqlValue::Text(String::from(s)));
        assert_eq!(inline("x\\"), "'x\\\\'");
        assert_eq!(inline("it's"), "'it''s'");
        assert_eq!(inline(r"a\'b"), r"'a\\''b'");
        assert_eq!(dialect.inline_value(&SqlValue::Int(3)), "3");
    }
}
