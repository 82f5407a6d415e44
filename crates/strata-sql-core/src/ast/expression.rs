//! Expression node types.
//!
//! Nodes are immutable values. Every builder method consumes its inputs and
//! returns a new node that owns them, so a finished tree can be cloned into
//! several statements and compiled any number of times.

use std::ops;

use super::statement::Select;
use crate::value::{SqlValue, ToSqlValue};

/// Binary operators.
///
/// Some operators belong to a dialect-scoped family and have no standard
/// token; a dialect must declare one or compilation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // String
    Concat,
    Like,
    NotLike,
    ILike,
    NotILike,

    // Pattern match
    Regex,
    IRegex,
    NotRegex,
    NotIRegex,
}

impl BinaryOp {
    /// Returns the logical name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Sub => "minus",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Mod => "modulo",
            Self::Eq => "equals",
            Self::NotEq => "notEquals",
            Self::Lt => "lt",
            Self::LtEq => "lte",
            Self::Gt => "gt",
            Self::GtEq => "gte",
            Self::And => "and",
            Self::Or => "or",
            Self::Concat => "concat",
            Self::Like => "like",
            Self::NotLike => "notLike",
            Self::ILike => "ilike",
            Self::NotILike => "notIlike",
            Self::Regex => "regex",
            Self::IRegex => "iregex",
            Self::NotRegex => "notRegex",
            Self::NotIRegex => "notIregex",
        }
    }

    /// Returns the ANSI token, or `None` for dialect-scoped operators.
    #[must_use]
    pub const fn standard_token(&self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
            Self::Mod => Some("%"),
            Self::Eq => Some("="),
            Self::NotEq => Some("<>"),
            Self::Lt => Some("<"),
            Self::LtEq => Some("<="),
            Self::Gt => Some(">"),
            Self::GtEq => Some(">="),
            Self::And => Some("AND"),
            Self::Or => Some("OR"),
            Self::Concat => Some("||"),
            Self::Like => Some("LIKE"),
            Self::NotLike => Some("NOT LIKE"),
            Self::ILike
            | Self::NotILike
            | Self::Regex
            | Self::IRegex
            | Self::NotRegex
            | Self::NotIRegex => None,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical NOT, rendered `(NOT x)`.
    Not,
    /// Negation, rendered `(-x)`.
    Neg,
    /// `DISTINCT(x)`.
    Distinct,
    /// Postfix `IS NULL`.
    IsNull,
    /// Postfix `IS NOT NULL`.
    IsNotNull,
}

impl UnaryOp {
    /// Returns the SQL keyword or symbol of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Neg => "-",
            Self::Distinct => "DISTINCT",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }
}

/// A column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Table name or alias qualifying the column.
    pub table: Option<String>,
    /// Column name as stored in the database.
    pub name: String,
    /// Property name the caller knows the column by, when it differs.
    pub property: Option<String>,
}

impl ColumnRef {
    /// Returns the property alias when it differs from the column name.
    #[must_use]
    pub fn distinct_property(&self) -> Option<&str> {
        self.property
            .as_deref()
            .filter(|property| *property != self.name)
    }
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name, rendered verbatim.
    pub name: String,
    /// The arguments, in call order.
    pub args: Vec<Expr>,
}

/// An SQL expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column reference.
    Column(ColumnRef),

    /// A literal value, bound as a parameter.
    Literal(SqlValue),

    /// Wildcard (`*` or `"t".*`).
    Wildcard {
        /// Table qualifier (optional).
        table: Option<String>,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// An aliased expression (`expr AS "alias"`).
    Alias {
        /// The wrapped expression.
        expr: Box<Expr>,
        /// The alias name.
        alias: String,
    },

    /// IN expression.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The candidate values.
        list: Vec<Expr>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// A parenthesized sub-select.
    Subquery(Box<Select>),
}

impl Expr {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef {
            table: None,
            name: name.into(),
            property: None,
        })
    }

    /// Creates a table-qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnRef {
            table: Some(table.into()),
            name: name.into(),
            property: None,
        })
    }

    /// Creates a literal from any convertible value.
    #[must_use]
    pub fn value<T: ToSqlValue>(value: T) -> Self {
        Self::Literal(value.to_sql_value())
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(SqlValue::Null)
    }

    /// Creates an unqualified `*`.
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::Wildcard { table: None }
    }

    /// Creates a function call node.
    #[must_use]
    pub fn function<I, A>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Self>,
    {
        Self::Function(FunctionCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: impl Into<Self>) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(self, op: UnaryOp) -> Self {
        Self::Unary {
            op,
            operand: Box::new(self),
        }
    }

    /// Creates an addition expression.
    #[must_use]
    pub fn plus(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Add, right)
    }

    /// Creates a subtraction expression.
    #[must_use]
    pub fn minus(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Sub, right)
    }

    /// Creates a multiplication expression.
    #[must_use]
    pub fn multiply(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Mul, right)
    }

    /// Creates a division expression.
    #[must_use]
    pub fn divide(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Div, right)
    }

    /// Creates a modulo expression.
    #[must_use]
    pub fn modulo(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Mod, right)
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates a string concatenation expression.
    #[must_use]
    pub fn concat(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Concat, right)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Like, pattern)
    }

    /// Creates a NOT LIKE expression.
    #[must_use]
    pub fn not_like(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotLike, pattern)
    }

    /// Creates a case-insensitive LIKE expression.
    #[must_use]
    pub fn ilike(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::ILike, pattern)
    }

    /// Creates a case-insensitive NOT LIKE expression.
    #[must_use]
    pub fn not_ilike(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotILike, pattern)
    }

    /// Creates a regex match expression.
    #[must_use]
    pub fn regex(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Regex, pattern)
    }

    /// Creates a case-insensitive regex match expression.
    #[must_use]
    pub fn iregex(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::IRegex, pattern)
    }

    /// Creates a negated regex match expression.
    #[must_use]
    pub fn not_regex(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotRegex, pattern)
    }

    /// Creates a negated case-insensitive regex match expression.
    #[must_use]
    pub fn not_iregex(self, pattern: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotIRegex, pattern)
    }

    /// Wraps the expression in `DISTINCT(...)`.
    #[must_use]
    pub fn distinct(self) -> Self {
        self.unary(UnaryOp::Distinct)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.unary(UnaryOp::IsNull)
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.unary(UnaryOp::IsNotNull)
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<I, A>(self, list: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Self>,
    {
        Self::In {
            expr: Box::new(self),
            list: list.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list<I, A>(self, list: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Self>,
    {
        Self::In {
            expr: Box::new(self),
            list: list.into_iter().map(Into::into).collect(),
            negated: true,
        }
    }

    /// Renames the expression with `AS`.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        Self::Alias {
            expr: Box::new(self),
            alias: alias.into(),
        }
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self {
        self.unary(UnaryOp::Not)
    }
}

impl ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self {
        self.unary(UnaryOp::Neg)
    }
}

macro_rules! impl_arith_op {
    ($($trait:ident :: $method:ident => $op:ident),+ $(,)?) => {
        $(
            impl<T: Into<Expr>> ops::$trait<T> for Expr {
                type Output = Self;

                fn $method(self, rhs: T) -> Self {
                    self.binary(BinaryOp::$op, rhs)
                }
            }
        )+
    };
}

impl_arith_op!(
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    Rem::rem => Mod,
);

macro_rules! impl_from_value {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Self::Literal(value.to_sql_value())
                }
            }
        )+
    };
}

impl_from_value!(
    SqlValue,
    bool,
    i64,
    i32,
    i16,
    i8,
    u32,
    u16,
    u8,
    f64,
    f32,
    String,
    &str,
    &String,
    Vec<u8>,
    &[u8]
);

impl From<ColumnRef> for Expr {
    fn from(column: ColumnRef) -> Self {
        Self::Column(column)
    }
}

impl From<FunctionCall> for Expr {
    fn from(call: FunctionCall) -> Self {
        Self::Function(call)
    }
}

impl From<Select> for Expr {
    fn from(select: Select) -> Self {
        Self::Subquery(Box::new(select))
    }
}
