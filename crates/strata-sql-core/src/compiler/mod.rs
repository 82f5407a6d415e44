//! Query compiler.
//!
//! [`compile`] turns an expression or statement tree into a
//! [`CompiledQuery`] for one dialect. Compilation is a pure function of its
//! inputs: it performs no I/O, shares no state between calls, and may run on
//! any number of threads at once.
//!
//! # The `string` output
//!
//! [`CompiledQuery::string`] inlines every literal as dialect-escaped SQL.
//! It exists for logs and error messages. It is **not** injection-safe and
//! must never be sent to a database; execute `text` with `values` instead.

mod renderer;

use serde::Serialize;
use tracing::{debug, trace};

use crate::ast::{Expr, Select};
use crate::dialect::Dialect;
use crate::error::Result;
use crate::value::SqlValue;

use renderer::Renderer;

/// The output of one compile call.
///
/// The Nth placeholder in `text`, reading left to right, binds `values[N-1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// SQL with placeholders.
    pub text: String,
    /// SQL with literals inlined. For display only.
    pub string: String,
    /// Parameter values, in placeholder order.
    pub values: Vec<SqlValue>,
}

impl CompiledQuery {
    /// Consumes the query and returns the SQL and parameters.
    #[must_use]
    pub fn build(self) -> (String, Vec<SqlValue>) {
        (self.text, self.values)
    }
}

/// A tree that can be compiled: a bare expression or a full statement.
#[derive(Debug, Clone, Copy)]
pub enum QueryRoot<'a> {
    /// An expression node.
    Expr(&'a Expr),
    /// A SELECT statement.
    Select(&'a Select),
}

impl<'a> From<&'a Expr> for QueryRoot<'a> {
    fn from(expr: &'a Expr) -> Self {
        Self::Expr(expr)
    }
}

impl<'a> From<&'a Select> for QueryRoot<'a> {
    fn from(select: &'a Select) -> Self {
        Self::Select(select)
    }
}

/// Compiles a tree for a dialect.
///
/// The placeholder counter starts fresh for every call, so compiling the
/// same tree twice yields identical output.
///
/// # Errors
///
/// - [`CompileError::UnsupportedOperator`](crate::CompileError::UnsupportedOperator)
///   if the tree uses an operator the dialect has no token for.
/// - [`CompileError::MalformedTree`](crate::CompileError::MalformedTree) if the
///   tree breaks a structural rule (empty identifier, empty `IN` list, a
///   SELECT with neither columns nor source).
///
/// Nothing is returned on failure; partial output is discarded.
pub fn compile<'a>(root: impl Into<QueryRoot<'a>>, dialect: &dyn Dialect) -> Result<CompiledQuery> {
    let root = root.into();
    trace!(dialect = dialect.name(), "compiling query");

    let mut renderer = Renderer::new(dialect);
    match root {
        QueryRoot::Expr(expr) => renderer.expr(expr)?,
        QueryRoot::Select(select) => renderer.select(select)?,
    }
    let query = renderer.finish();

    debug!(
        dialect = dialect.name(),
        params = query.values.len(),
        "compiled query"
    );
    Ok(query)
}

impl Expr {
    /// Compiles this expression. See [`compile`].
    ///
    /// # Errors
    ///
    /// See [`compile`].
    pub fn to_query(&self, dialect: &dyn Dialect) -> Result<CompiledQuery> {
        compile(self, dialect)
    }
}

impl Select {
    /// Compiles this statement. See [`compile`].
    ///
    /// # Errors
    ///
    /// See [`compile`].
    pub fn to_query(&self, dialect: &dyn Dialect) -> Result<CompiledQuery> {
        compile(self, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{GenericDialect, MysqlDialect, PostgresDialect, SqliteDialect};
    use crate::error::CompileError;
    use crate::functions;
    use crate::schema::Table;

    fn pg<'a>(root: impl Into<QueryRoot<'a>>) -> CompiledQuery {
        compile(root, &PostgresDialect).unwrap()
    }

    #[test]
    fn test_regex_operators() {
        let customer = Table::new("customer");
        let cases = [
            (customer.col("metadata").regex("age"), "~"),
            (customer.col("metadata").iregex("age"), "~*"),
            (customer.col("metadata").not_regex("age"), "!~"),
            (customer.col("metadata").not_iregex("age"), "!~*"),
        ];
        for (expr, token) in cases {
            let q = pg(&expr);
            assert_eq!(q.text, format!(r#"("customer"."metadata" {token} $1)"#));
            assert_eq!(q.string, format!(r#"("customer"."metadata" {token} 'age')"#));
            assert_eq!(q.values, vec![SqlValue::Text(String::from("age"))]);
        }
    }

    #[test]
    fn test_binary_is_fully_parenthesized() {
        let expr = Expr::column("a").plus(Expr::column("b").multiply(2));
        assert_eq!(pg(&expr).text, r#"("a" + ("b" * $1))"#);

        let expr = Expr::column("a").plus(Expr::column("b")).multiply(2);
        assert_eq!(pg(&expr).text, r#"(("a" + "b") * $1)"#);
    }

    #[test]
    fn test_unary_rendering() {
        let c = || Expr::column("c");
        assert_eq!(pg(&c().distinct()).text, r#"DISTINCT("c")"#);
        assert_eq!(pg(&!c()).text, r#"(NOT "c")"#);
        assert_eq!(pg(&-c()).text, r#"(-"c")"#);
        let negated = pg(&-Expr::from(-5));
        assert_eq!(negated.text, "(-$1)");
        assert_eq!(negated.string, "(- -5)");
        assert_eq!(pg(&c().is_null()).text, r#"("c" IS NULL)"#);
        assert_eq!(pg(&c().is_not_null()).text, r#"("c" IS NOT NULL)"#);
    }

    #[test]
    fn test_in_list() {
        let q = pg(&Expr::column("status").in_list(["active", "pending"]));
        assert_eq!(q.text, r#"("status" IN ($1, $2))"#);
        assert_eq!(q.string, r#"("status" IN ('active', 'pending'))"#);

        let q = pg(&Expr::column("id").not_in_list([1, 2, 3]));
        assert_eq!(q.text, r#"("id" NOT IN ($1, $2, $3))"#);
        assert_eq!(q.values.len(), 3);
    }

    #[test]
    fn test_empty_in_list_is_malformed() {
        let expr = Expr::column("id").in_list(Vec::<Expr>::new());
        assert_eq!(
            compile(&expr, &PostgresDialect),
            Err(CompileError::MalformedTree(String::from("IN list is empty")))
        );
    }

    #[test]
    fn test_unsupported_operator_names_dialect() {
        let expr = Expr::column("metadata").iregex("age");
        assert_eq!(
            compile(&expr, &MysqlDialect),
            Err(CompileError::UnsupportedOperator {
                operator: "iregex",
                dialect: "mysql",
            })
        );
        assert!(compile(&expr, &SqliteDialect).is_err());
        assert!(compile(&expr, &GenericDialect).is_err());
    }

    #[test]
    fn test_error_deep_in_tree_fails_whole_call() {
        let expr = functions::COUNT
            .call([Expr::column("a")])
            .plus(Expr::column("b").plus(Expr::column("c").regex("x")));
        assert!(matches!(
            compile(&expr, &GenericDialect),
            Err(CompileError::UnsupportedOperator {
                operator: "regex",
                ..
            })
        ));
    }

    #[test]
    fn test_select_with_empty_list_uses_star() {
        let user = Table::new("user");
        assert_eq!(
            pg(&Select::new().from(&user)).text,
            r#"SELECT "user".* FROM "user""#
        );
    }

    #[test]
    fn test_select_without_columns_or_source_is_malformed() {
        assert!(matches!(
            compile(&Select::new(), &PostgresDialect),
            Err(CompileError::MalformedTree(_))
        ));
    }

    #[test]
    fn test_compile_is_repeatable() {
        let user = Table::new("user");
        let s = user
            .select([user.col("id")])
            .where_clause(user.col("age").gt(18).and(user.col("name").eq("bob")));
        let first = pg(&s);
        let second = pg(&s);
        assert_eq!(first, second);
        assert_eq!(first.text, r#"SELECT "user"."id" FROM "user" WHERE (("user"."age" > $1) AND ("user"."name" = $2))"#);
    }

    #[test]
    fn test_build_returns_text_and_values() {
        let (sql, params) = pg(&Expr::column("a").eq(1)).build();
        assert_eq!(sql, r#"("a" = $1)"#);
        assert_eq!(params, vec![SqlValue::Int(1)]);
    }
}
