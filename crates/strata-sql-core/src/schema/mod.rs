//! Table handles used to create column references.
//!
//! Declaring and loading table metadata is left to the caller. A [`Table`]
//! only knows its name and alias, which is all the compiler needs to
//! qualify and quote column references.

use crate::ast::{ColumnRef, Expr, Select};

/// A table that columns can be taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The SQL table name.
    pub name: String,
    /// Alias used in FROM and to qualify columns.
    pub alias: Option<String>,
}

impl Table {
    /// Creates a table handle.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Returns a copy of the handle with an alias.
    #[must_use]
    pub fn alias(&self, alias: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            alias: Some(alias.into()),
        }
    }

    /// Returns the name columns are qualified with: the alias if set.
    #[must_use]
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Returns a column reference on this table.
    #[must_use]
    pub fn col(&self, name: impl Into<String>) -> Expr {
        Expr::Column(ColumnRef {
            table: Some(self.reference().to_owned()),
            name: name.into(),
            property: None,
        })
    }

    /// Returns a column reference known to the caller by another property name.
    ///
    /// In a select list the column renders as `"t"."name" AS "property"`.
    #[must_use]
    pub fn col_as(&self, name: impl Into<String>, property: impl Into<String>) -> Expr {
        Expr::Column(ColumnRef {
            table: Some(self.reference().to_owned()),
            name: name.into(),
            property: Some(property.into()),
        })
    }

    /// Returns `"t".*`.
    #[must_use]
    pub fn star(&self) -> Expr {
        Expr::Wildcard {
            table: Some(self.reference().to_owned()),
        }
    }

    /// Starts a SELECT from this table.
    #[must_use]
    pub fn select<I, A>(&self, items: I) -> Select
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Select::new().columns(items).from(self)
    }
}
