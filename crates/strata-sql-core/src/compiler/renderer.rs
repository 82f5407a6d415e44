//! Single-pass tree renderer.
//!
//! One depth-first, left-to-right walk writes two texts side by side: the
//! parameterized `text` and the literal-inlined `string`. Every token other
//! than a literal goes to both buffers, so the two renderings cannot drift.

use tracing::debug;

use super::CompiledQuery;
use crate::ast::{BinaryOp, Expr, OrderBy, Select, TableRef, UnaryOp};
use crate::dialect::{Dialect, PlaceholderStyle};
use crate::error::{CompileError, Result};
use crate::value::SqlValue;

/// Accumulates the output of one compile call.
///
/// Owns the placeholder counter; a renderer is never reused across calls.
pub(super) struct Renderer<'d> {
    dialect: &'d dyn Dialect,
    placeholders: PlaceholderStyle,
    text: String,
    string: String,
    values: Vec<SqlValue>,
}

impl<'d> Renderer<'d> {
    pub(super) fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            placeholders: dialect.placeholder_style(),
            text: String::new(),
            string: String::new(),
            values: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> CompiledQuery {
        CompiledQuery {
            text: self.text,
            string: self.string,
            values: self.values,
        }
    }

    fn push(&mut self, s: &str) {
        self.text.push_str(s);
        self.string.push_str(s);
    }

    fn push_identifier(&mut self, name: &str, what: &str) -> Result<()> {
        if name.is_empty() {
            return Err(CompileError::MalformedTree(format!("empty {what} name")));
        }
        let quoted = self.dialect.quote_identifier(name);
        self.push(&quoted);
        Ok(())
    }

    fn push_value(&mut self, value: &SqlValue) {
        let placeholder = self.placeholders.render(self.values.len());
        self.text.push_str(&placeholder);
        self.string.push_str(&self.dialect.inline_value(value));
        self.values.push(value.clone());
    }

    fn operator(&self, op: BinaryOp) -> Result<&'static str> {
        self.dialect.binary_operator(op).ok_or_else(|| {
            debug!(
                operator = op.name(),
                dialect = self.dialect.name(),
                "operator rejected by dialect"
            );
            CompileError::UnsupportedOperator {
                operator: op.name(),
                dialect: self.dialect.name(),
            }
        })
    }

    fn comma_separated(&mut self, exprs: &[Expr]) -> Result<()> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.expr(expr)?;
        }
        Ok(())
    }

    pub(super) fn expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Column(column) => {
                if let Some(table) = &column.table {
                    self.push_identifier(table, "table")?;
                    self.push(".");
                }
                self.push_identifier(&column.name, "column")
            }
            Expr::Literal(value) => {
                self.push_value(value);
                Ok(())
            }
            Expr::Wildcard { table } => {
                if let Some(table) = table {
                    self.push_identifier(table, "table")?;
                    self.push(".");
                }
                self.push("*");
                Ok(())
            }
            Expr::Binary { left, op, right } => {
                let token = self.operator(*op)?;
                self.push("(");
                self.expr(left)?;
                self.push(" ");
                self.push(token);
                self.push(" ");
                self.expr(right)?;
                self.push(")");
                Ok(())
            }
            Expr::Unary { op, operand } => self.unary(*op, operand),
            Expr::Function(call) => {
                if call.name.is_empty() {
                    return Err(CompileError::MalformedTree(String::from(
                        "empty function name",
                    )));
                }
                self.push(&call.name);
                self.push("(");
                self.comma_separated(&call.args)?;
                self.push(")");
                Ok(())
            }
            Expr::Alias { expr, alias } => {
                self.expr(expr)?;
                self.push(" AS ");
                self.push_identifier(alias, "alias")
            }
            Expr::In {
                expr,
                list,
                negated,
            } => {
                if list.is_empty() {
                    return Err(CompileError::MalformedTree(String::from(
                        "IN list is empty",
                    )));
                }
                self.push("(");
                self.expr(expr)?;
                self.push(if *negated { " NOT IN (" } else { " IN (" });
                match list.as_slice() {
                    [Expr::Subquery(select)] => self.select(select)?,
                    _ => self.comma_separated(list)?,
                }
                self.push("))");
                Ok(())
            }
            Expr::Subquery(select) => {
                self.push("(");
                self.select(select)?;
                self.push(")");
                Ok(())
            }
        }
    }

    fn unary(&mut self, op: UnaryOp, operand: &Expr) -> Result<()> {
        match op {
            UnaryOp::Distinct => {
                self.push("DISTINCT(");
                self.expr(operand)?;
                self.push(")");
            }
            UnaryOp::Not => {
                self.push("(NOT ");
                self.expr(operand)?;
                self.push(")");
            }
            UnaryOp::Neg => {
                self.push("(-");
                if let Expr::Literal(value) = operand {
                    // `--` would open a line comment in the inlined string.
                    if self.dialect.inline_value(value).starts_with('-') {
                        self.string.push(' ');
                    }
                }
                self.expr(operand)?;
                self.push(")");
            }
            UnaryOp::IsNull | UnaryOp::IsNotNull => {
                self.push("(");
                self.expr(operand)?;
                self.push(" ");
                self.push(op.as_str());
                self.push(")");
            }
        }
        Ok(())
    }

    /// Renders a select-list item. A bare column known by another property
    /// name is aliased to that property.
    fn select_item(&mut self, expr: &Expr) -> Result<()> {
        self.expr(expr)?;
        if let Expr::Column(column) = expr {
            if let Some(property) = column.distinct_property() {
                self.push(" AS ");
                self.push_identifier(property, "property")?;
            }
        }
        Ok(())
    }

    fn table_ref(&mut self, source: &TableRef) -> Result<()> {
        match source {
            TableRef::Table(table) => {
                self.push_identifier(&table.name, "table")?;
                if let Some(alias) = &table.alias {
                    self.push(" AS ");
                    self.push_identifier(alias, "alias")?;
                }
            }
            TableRef::Subquery { query, alias } => {
                self.push("(");
                self.select(query)?;
                self.push(") AS ");
                self.push_identifier(alias, "alias")?;
            }
        }
        Ok(())
    }

    fn order_by(&mut self, entries: &[OrderBy]) -> Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.expr(&entry.expr)?;
            if let Some(direction) = entry.direction {
                self.push(" ");
                self.push(direction.as_str());
            }
        }
        Ok(())
    }

    pub(super) fn select(&mut self, select: &Select) -> Result<()> {
        if select.columns.is_empty() && select.from.is_none() {
            return Err(CompileError::MalformedTree(String::from(
                "SELECT has neither a select list nor a source",
            )));
        }

        self.push("SELECT ");
        if select.distinct {
            self.push("DISTINCT ");
        }

        if select.columns.is_empty() {
            match &select.from {
                Some(TableRef::Table(table)) => {
                    self.push_identifier(table.reference(), "table")?;
                    self.push(".*");
                }
                _ => self.push("*"),
            }
        } else {
            for (i, item) in select.columns.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                self.select_item(item)?;
            }
        }

        if let Some(source) = &select.from {
            self.push(" FROM ");
            self.table_ref(source)?;
        }

        if let Some(predicate) = &select.where_clause {
            self.push(" WHERE ");
            self.expr(predicate)?;
        }

        if !select.group_by.is_empty() {
            self.push(" GROUP BY ");
            self.comma_separated(&select.group_by)?;
        }

        if let Some(predicate) = &select.having {
            self.push(" HAVING ");
            self.expr(predicate)?;
        }

        if !select.order_by.is_empty() {
            self.push(" ORDER BY ");
            self.order_by(&select.order_by)?;
        }

        if let Some(limit) = select.limit {
            self.push(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = select.offset {
            self.push(&format!(" OFFSET {offset}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MysqlDialect, PostgresDialect};

    #[test]
    fn test_push_writes_both_buffers() {
        let mut r = Renderer::new(&PostgresDialect);
        r.push("SELECT ");
        r.push_value(&SqlValue::Text(String::from("it's")));
        let out = r.finish();
        assert_eq!(out.text, "SELECT $1");
        assert_eq!(out.string, "SELECT 'it''s'");
        assert_eq!(out.values, vec![SqlValue::Text(String::from("it's"))]);
    }

    #[test]
    fn test_counter_advances_per_value() {
        let mut r = Renderer::new(&PostgresDialect);
        r.push_value(&SqlValue::Int(1));
        r.push_value(&SqlValue::Int(1));
        r.push_value(&SqlValue::Int(1));
        assert_eq!(r.finish().text, "$1$2$3");
    }

    #[test]
    fn test_unnumbered_placeholders() {
        let mut r = Renderer::new(&MysqlDialect);
        r.push_value(&SqlValue::Int(1));
        r.push(",");
        r.push_value(&SqlValue::Int(2));
        assert_eq!(r.finish().text, "?,?");
    }

    #[test]
    fn test_negated_negative_literal_is_not_a_comment() {
        let mut r = Renderer::new(&PostgresDialect);
        r.expr(&-Expr::from(-5)).unwrap();
        r.push(" ");
        r.expr(&-Expr::from(5)).unwrap();
        let out = r.finish();
        assert_eq!(out.text, "(-$1) (-$2)");
        assert_eq!(out.string, "(- -5) (-5)");
        assert!(!out.string.contains("--"));
    }

    #[test]
    fn test_empty_identifier_is_malformed() {
        let mut r = Renderer::new(&PostgresDialect);
        assert_eq!(
            r.expr(&Expr::qualified_column("user", "")),
            Err(CompileError::MalformedTree(String::from(
                "empty column name"
            )))
        );
    }
}
