//! Sales Report - Multi-Dialect Compilation Example
//!
//! This example builds one reporting query and compiles it for every
//! built-in dialect, showing:
//! - Aggregates and declared functions
//! - Placeholder styles per dialect
//! - Rejection of dialect-scoped operators
//!
//! Run with: cargo run --example report -- [dialect]

use strata_sql_core::{
    declare_function, dialect, functions as f, DialectKind, Expr, OrderBy, Select, Table,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn report(orders: &Table) -> Select {
    let total = f::SUM.call([orders.col("amount")]);
    orders
        .select([
            orders.col_as("customer_name", "customer"),
            f::COUNT.call([orders.col("id")]).alias("orders"),
            total.clone().alias("total"),
        ])
        .where_clause(orders.col("status").in_list(["paid", "shipped"]))
        .where_clause(
            declare_function("DATE_PART")
                .call([Expr::from("year"), orders.col("created_at")])
                .gt_eq(2024),
        )
        .group_by([orders.col("customer_name")])
        .having(total.gt(1000))
        .order_by(OrderBy::desc(orders.col("customer_name")))
        .limit(20)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let orders = Table::new("orders");
    let query = report(&orders);

    let kinds = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<DialectKind>()?],
        None => DialectKind::ALL.to_vec(),
    };

    for kind in kinds {
        let compiled = query.to_query(kind.dialect())?;
        info!(dialect = %kind, "{}", compiled.text);
        println!("-- {kind}\n{}\n-- debug: {}\n", compiled.text, compiled.string);
    }

    let pattern = orders.col("customer_name").iregex("^acme");
    for kind in DialectKind::ALL {
        match pattern.to_query(dialect::by_name(kind.as_str())?) {
            Ok(compiled) => info!(dialect = %kind, "{}", compiled.text),
            Err(err) => warn!(dialect = %kind, "{err}"),
        }
    }

    Ok(())
}
