//! Function registry.
//!
//! Well-known functions are exposed as constants (`functions::UPPER`) and
//! through [`lookup`]. Any other name can be declared with [`declare`].
//! Both paths yield the same [`Function`] value, and a call through either
//! produces an identical [`Expr::Function`] node.
//!
//! ```rust
//! use strata_sql_core::{functions, Table, dialect::PostgresDialect};
//!
//! let user = Table::new("user");
//! let known = functions::UPPER.call([user.col("name")]);
//! let declared = functions::declare("UPPER").call([user.col("name")]);
//! assert_eq!(known, declared);
//!
//! let q = known.to_query(&PostgresDialect).unwrap();
//! assert_eq!(q.text, r#"UPPER("user"."name")"#);
//! ```

use std::borrow::Cow;

use crate::ast::{Expr, FunctionCall};

/// A callable SQL function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    name: Cow<'static, str>,
}

impl Function {
    /// Creates a function handle from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the function to arguments, in order.
    ///
    /// No arity check is made; `COUNT()` with no arguments renders as-is.
    #[must_use]
    pub fn call<I, A>(&self, args: I) -> Expr
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Expr::Function(FunctionCall {
            name: self.name.clone().into_owned(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// Applies the function to no arguments, e.g. `NOW()`.
    #[must_use]
    pub fn call0(&self) -> Expr {
        self.call(std::iter::empty::<Expr>())
    }
}

/// Declares a function by name, for functions outside the catalog.
#[must_use]
pub fn declare(name: impl Into<Cow<'static, str>>) -> Function {
    Function { name: name.into() }
}

macro_rules! catalog {
    ($($(#[$doc:meta])* $ident:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub const $ident: Function = Function::new(stringify!($ident));
        )+

        /// Every well-known function, in catalog order.
        pub const CATALOG: &[Function] = &[$($ident),+];
    };
}

catalog!(
    // Aggregates
    /// `AVG(x)`
    AVG,
    /// `COUNT(x)`
    COUNT,
    /// `DISTINCT(x)`
    DISTINCT,
    /// `MAX(x)`
    MAX,
    /// `MIN(x)`
    MIN,
    /// `SUM(x)`
    SUM,
    // Scalars
    /// `ABS(x)`
    ABS,
    /// `COALESCE(a, b, ...)`
    COALESCE,
    /// `LEFT(s, n)`
    LEFT,
    /// `LENGTH(s)`
    LENGTH,
    /// `LOWER(s)`
    LOWER,
    /// `LTRIM(s)`
    LTRIM,
    /// `RANDOM()`
    RANDOM,
    /// `RIGHT(s, n)`
    RIGHT,
    /// `ROUND(x, digits)`
    ROUND,
    /// `RTRIM(s)`
    RTRIM,
    /// `SUBSTR(s, start, len)`
    SUBSTR,
    /// `TRIM(s)`
    TRIM,
    /// `UPPER(s)`
    UPPER,
    // Date and time
    /// `CURRENT_TIMESTAMP()`
    CURRENT_TIMESTAMP,
    /// `DAY(t)`
    DAY,
    /// `HOUR(t)`
    HOUR,
    /// `MONTH(t)`
    MONTH,
    /// `NOW()`
    NOW,
    /// `YEAR(t)`
    YEAR,
);

/// Finds a well-known function by name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Function> {
    CATALOG
        .iter()
        .find(|function| function.name.eq_ignore_ascii_case(name))
}
