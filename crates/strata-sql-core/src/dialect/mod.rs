//! SQL dialect descriptors.
//!
//! Different databases quote identifiers, number placeholders, and spell
//! operators differently. A [`Dialect`] is read-only configuration that the
//! compiler consults on every token it emits; it is always passed explicitly
//! to a compile call, never held as ambient state.

mod generic;
mod mysql;
mod postgres;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::ast::BinaryOp;
use crate::error::{CompileError, Result};
use crate::value::SqlValue;

/// How bound parameters appear in query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `prefix` followed by a counter that starts at `first` (`$1`, `$2`, ...).
    Numbered {
        /// Token written before the number.
        prefix: &'static str,
        /// Number given to the first parameter.
        first: usize,
    },
    /// The same token for every parameter (`?`).
    Unnumbered(&'static str),
}

impl PlaceholderStyle {
    /// Renders the placeholder for the parameter at `position` (0-based).
    #[must_use]
    pub fn render(&self, position: usize) -> String {
        match self {
            Self::Numbered { prefix, first } => format!("{prefix}{}", first + position),
            Self::Unnumbered(token) => String::from(*token),
        }
    }
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the parameter placeholder style.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Unnumbered("?")
    }

    /// Returns the token for a binary operator, or `None` if unsupported.
    fn binary_operator(&self, op: BinaryOp) -> Option<&'static str> {
        op.standard_token()
    }

    /// Quotes an identifier, doubling any embedded quote character.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(quote);
        for c in name.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
        out
    }

    /// Renders a value inline, for the debug rendering only.
    fn inline_value(&self, value: &SqlValue) -> String {
        value.to_sql_inline()
    }
}

/// The built-in dialects, selectable by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// ANSI SQL with `?` placeholders.
    Generic,
    /// PostgreSQL.
    #[default]
    Postgres,
    /// MySQL / MariaDB.
    Mysql,
    /// SQLite.
    Sqlite,
}

impl DialectKind {
    /// All built-in dialects.
    pub const ALL: [Self; 4] = [Self::Generic, Self::Postgres, Self::Mysql, Self::Sqlite];

    /// Returns the dialect descriptor.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GenericDialect,
            Self::Postgres => &PostgresDialect,
            Self::Mysql => &MysqlDialect,
            Self::Sqlite => &SqliteDialect,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            _ => Err(CompileError::UnknownDialect(String::from(s))),
        }
    }
}

/// Looks up a built-in dialect by name.
///
/// # Errors
///
/// Returns [`CompileError::UnknownDialect`] if no dialect has that name.
pub fn by_name(name: &str) -> Result<&'static dyn Dialect> {
    name.parse::<DialectKind>().map(DialectKind::dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_render() {
        let numbered = PlaceholderStyle::Numbered {
            prefix: "$",
            first: 1,
        };
        assert_eq!(numbered.render(0), "$1");
        assert_eq!(numbered.render(9), "$10");
        assert_eq!(PlaceholderStyle::Unnumbered("?").render(3), "?");
    }

    #[test]
    fn test_quote_identifier_escapes() {
        let pg = PostgresDialect;
        assert_eq!(pg.quote_identifier("user"), "\"user\"");
        assert_eq!(pg.quote_identifier("we\"ird"), "\"we\"\"ird\"");

        let my = MysqlDialect;
        assert_eq!(my.quote_identifier("user"), "`user`");
        assert_eq!(my.quote_identifier("a`b"), "`a``b`");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("postgres").unwrap().name(), "postgres");
        assert_eq!(by_name("PG").unwrap().name(), "postgres");
        assert_eq!(by_name("mysql").unwrap().name(), "mysql");
        assert_eq!(by_name("sqlite").unwrap().name(), "sqlite");
        assert_eq!(by_name("generic").unwrap().name(), "generic");
        assert_eq!(
            by_name("oracle").unwrap_err(),
            CompileError::UnknownDialect(String::from("oracle"))
        );
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in DialectKind::ALL {
            assert_eq!(kind.to_string().parse::<DialectKind>().unwrap(), kind);
            assert_eq!(kind.dialect().name(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_from_config() {
        #[derive(Deserialize)]
        struct Config {
            dialect: DialectKind,
        }

        let config: Config = serde_json::from_str(r#"{"dialect":"sqlite"}"#).unwrap();
        assert_eq!(config.dialect, DialectKind::Sqlite);
        assert_eq!(
            serde_json::to_string(&DialectKind::Postgres).unwrap(),
            r#""postgres""#
        );
    }
}
