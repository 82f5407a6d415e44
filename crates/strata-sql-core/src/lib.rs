//! # strata-sql-core
//!
//! Build SQL as an immutable expression tree and compile it to
//! dialect-specific, parameterized SQL.
//!
//! This crate provides:
//! - An expression node model: columns, literals, operators, function calls,
//!   aliases, and SELECT statements
//! - Dialect descriptors for PostgreSQL, MySQL, SQLite, and ANSI SQL
//! - A function registry with well-known functions and ad-hoc declarations
//! - A single-pass compiler producing SQL text, a literal-inlined debug
//!   rendering, and the ordered parameter list
//!
//! ## Example
//!
//! ```rust
//! use strata_sql_core::{functions as f, Table, dialect::PostgresDialect};
//!
//! let user = Table::new("user");
//! let query = user
//!     .select([f::AVG
//!         .call([f::DISTINCT
//!             .call([f::COUNT.call([user.col("id")]) + f::MAX.call([user.col("id")])])
//!             - f::MIN.call([user.col("id")])])
//!         * 100])
//!     .to_query(&PostgresDialect)
//!     .unwrap();
//!
//! assert_eq!(
//!     query.text,
//!     r#"SELECT (AVG((DISTINCT((COUNT("user"."id") + MAX("user"."id"))) - MIN("user"."id"))) * $1) FROM "user""#
//! );
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Literals are never spliced into `text`; each one becomes a placeholder
//! and an entry in `values`:
//!
//! ```rust
//! use strata_sql_core::{Table, SqlValue, dialect::PostgresDialect};
//!
//! let user = Table::new("user");
//! let user_input = "'; DROP TABLE users; --";
//! let query = user
//!     .select([user.col("id")])
//!     .where_clause(user.col("name").eq(user_input))
//!     .to_query(&PostgresDialect)
//!     .unwrap();
//!
//! assert_eq!(query.text, r#"SELECT "user"."id" FROM "user" WHERE ("user"."name" = $1)"#);
//! assert_eq!(query.values, vec![SqlValue::Text(String::from(user_input))]);
//! ```
//!
//! The `string` rendering of a query inlines literals for logging. It must
//! never be executed.

pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod functions;
pub mod schema;
pub mod value;

pub use ast::{BinaryOp, ColumnRef, Expr, FunctionCall, OrderBy, Select, TableRef, UnaryOp};
pub use compiler::{compile, CompiledQuery, QueryRoot};
pub use dialect::{Dialect, DialectKind};
pub use error::{CompileError, Result};
pub use functions::{declare as declare_function, Function};
pub use schema::Table;
pub use value::{SqlValue, ToSqlValue};
