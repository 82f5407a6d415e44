//! SELECT statement shape and builder.
//!
//! Unlike a typestate builder, every clause here can be set in any order.
//! Which clauses render depends only on which ones are present.

use super::expression::Expr;
use crate::schema::Table;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction. `None` leaves it to the database.
    pub direction: Option<OrderDirection>,
}

impl OrderBy {
    /// Orders ascending.
    #[must_use]
    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            direction: Some(OrderDirection::Asc),
        }
    }

    /// Orders descending.
    #[must_use]
    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            direction: Some(OrderDirection::Desc),
        }
    }
}

impl From<Expr> for OrderBy {
    fn from(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
        }
    }
}

/// The FROM source of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A table, optionally aliased.
    Table(Table),
    /// A sub-select. Postgres requires the alias.
    Subquery {
        /// The nested statement.
        query: Box<Select>,
        /// Alias.
        alias: String,
    },
}

impl TableRef {
    /// Creates a sub-select source.
    #[must_use]
    pub fn subquery(query: Select, alias: impl Into<String>) -> Self {
        Self::Subquery {
            query: Box::new(query),
            alias: alias.into(),
        }
    }
}

impl From<Table> for TableRef {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<&Table> for TableRef {
    fn from(table: &Table) -> Self {
        Self::Table(table.clone())
    }
}

/// A SELECT statement.
///
/// # Example
///
/// ```rust
/// use strata_sql_core::{Select, Table, dialect::PostgresDialect};
///
/// let user = Table::new("user");
/// let query = Select::new()
///     .column(user.col("id"))
///     .from(&user)
///     .where_clause(user.col("email").eq("a@example.com"))
///     .to_query(&PostgresDialect)
///     .unwrap();
///
/// assert_eq!(
///     query.text,
///     r#"SELECT "user"."id" FROM "user" WHERE ("user"."email" = $1)"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    /// Whether `SELECT DISTINCT` was requested.
    pub distinct: bool,
    /// Select list, in order.
    pub columns: Vec<Expr>,
    /// FROM source.
    pub from: Option<TableRef>,
    /// WHERE predicate.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// HAVING predicate.
    pub having: Option<Expr>,
    /// ORDER BY entries.
    pub order_by: Vec<OrderBy>,
    /// LIMIT value.
    pub limit: Option<u64>,
    /// OFFSET value.
    pub offset: Option<u64>,
}

impl Select {
    /// Creates an empty SELECT.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one item to the select list.
    #[must_use]
    pub fn column(mut self, expr: impl Into<Expr>) -> Self {
        self.columns.push(expr.into());
        self
    }

    /// Appends items to the select list.
    #[must_use]
    pub fn columns<I, A>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.columns.extend(exprs.into_iter().map(Into::into));
        self
    }

    /// Sets `SELECT DISTINCT`.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Sets the FROM source.
    #[must_use]
    pub fn from(mut self, source: impl Into<TableRef>) -> Self {
        self.from = Some(source.into());
        self
    }

    /// Sets the WHERE predicate, AND-ing it with any existing one.
    #[must_use]
    pub fn where_clause(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = Some(conjoin(self.where_clause.take(), predicate.into()));
        self
    }

    /// Appends GROUP BY expressions.
    #[must_use]
    pub fn group_by<I, A>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        self.group_by.extend(exprs.into_iter().map(Into::into));
        self
    }

    /// Sets the HAVING predicate, AND-ing it with any existing one.
    #[must_use]
    pub fn having(mut self, predicate: impl Into<Expr>) -> Self {
        self.having = Some(conjoin(self.having.take(), predicate.into()));
        self
    }

    /// Appends an ORDER BY entry.
    #[must_use]
    pub fn order_by(mut self, order: impl Into<OrderBy>) -> Self {
        self.order_by.push(order.into());
        self
    }

    /// Sets LIMIT.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets OFFSET.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }
}

fn conjoin(existing: Option<Expr>, predicate: Expr) -> Expr {
    match existing {
        Some(current) => current.and(predicate),
        None => predicate,
    }
}
