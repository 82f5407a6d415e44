#![allow(dead_code)]

use strata_sql_core::dialect::PostgresDialect;
use strata_sql_core::{compile, CompiledQuery, Expr, QueryRoot, Select, Table, TableRef};

pub fn user() -> Table {
    Table::new("user")
}

pub fn customer() -> Table {
    Table::new("customer")
}

pub fn post() -> Table {
    Table::new("post")
}

pub fn pg<'a>(root: impl Into<QueryRoot<'a>>) -> CompiledQuery {
    compile(root, &PostgresDialect).unwrap_or_else(|e| panic!("Failed to compile: {e}"))
}

/// Counts the literal nodes reachable from an expression.
pub fn literal_count(expr: &Expr) -> usize {
    match expr {
        Expr::Literal(_) => 1,
        Expr::Column(_) | Expr::Wildcard { .. } => 0,
        Expr::Binary { left, right, .. } => literal_count(left) + literal_count(right),
        Expr::Unary { operand, .. } => literal_count(operand),
        Expr::Function(call) => call.args.iter().map(literal_count).sum(),
        Expr::Alias { expr, .. } => literal_count(expr),
        Expr::In { expr, list, .. } => {
            literal_count(expr) + list.iter().map(literal_count).sum::<usize>()
        }
        Expr::Subquery(select) => select_literal_count(select),
    }
}

/// Counts the literal nodes reachable from a statement.
pub fn select_literal_count(select: &Select) -> usize {
    let source = match &select.from {
        Some(TableRef::Subquery { query, .. }) => select_literal_count(query),
        _ => 0,
    };
    select.columns.iter().map(literal_count).sum::<usize>()
        + source
        + select.where_clause.as_ref().map_or(0, literal_count)
        + select.group_by.iter().map(literal_count).sum::<usize>()
        + select.having.as_ref().map_or(0, literal_count)
        + select
            .order_by
            .iter()
            .map(|o| literal_count(&o.expr))
            .sum::<usize>()
}

/// Returns the numbers of every `$N` placeholder in `text`, in order.
pub fn placeholder_numbers(text: &str) -> Vec<usize> {
    let mut numbers = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(&(_, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        if let Ok(n) = digits.parse() {
            numbers.push(n);
        }
    }
    numbers
}
