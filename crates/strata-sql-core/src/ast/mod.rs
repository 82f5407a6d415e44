//! Expression and statement tree types.

mod expression;
mod statement;

pub use expression::{BinaryOp, ColumnRef, Expr, FunctionCall, UnaryOp};
pub use statement::{OrderBy, OrderDirection, Select, TableRef};
