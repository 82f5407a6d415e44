//! Error types for query compilation.

use thiserror::Error;

/// Errors raised while compiling an expression tree.
///
/// A failed compile never yields partial text or values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The active dialect has no token for an operator used in the tree.
    #[error("operator '{operator}' is not supported by the {dialect} dialect")]
    UnsupportedOperator {
        /// Logical name of the operator (e.g. `iregex`).
        operator: &'static str,
        /// Name of the dialect that rejected it.
        dialect: &'static str,
    },

    /// The tree breaks a structural rule the compiler relies on.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// No dialect is registered under the requested name.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),
}

/// Result type alias for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
