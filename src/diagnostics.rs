//! Read-mostly inspection of the `cart` table, shared by the `cart_smoke`
//! binary and the debug route.

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{db, models::CartItem};

pub const CART_COLUMNS: &str = r#"
    SELECT column_name::text AS column_name, data_type::text AS data_type
    FROM information_schema.columns
    WHERE table_name = 'cart'
    ORDER BY ordinal_position
"#;

pub const CART_COUNT: &str = "SELECT COUNT(*) AS count FROM cart";

pub const CART_DUMP: &str = r#"
    SELECT id, user_id, product_id, quantity, selected_memory, created_at
    FROM cart
    ORDER BY id
"#;

pub const USER_SUMMARIES: &str = "SELECT id, email, first_name FROM users ORDER BY id";

/// Probe row used by the smoke test; suppressed when the key already exists.
pub const PROBE_INSERT: &str = r#"
    INSERT INTO cart (user_id, product_id, quantity)
    VALUES ($1, $2, $3)
    ON CONFLICT (user_id, product_id, selected_memory) DO NOTHING
    RETURNING id, user_id, product_id, quantity, selected_memory, created_at
"#;

#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct UserBrief {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Inserted(CartItem),
    AlreadyPresent,
}

#[derive(Debug)]
pub struct CartReport {
    pub columns: Vec<ColumnInfo>,
    pub row_count: i64,
    pub probe: ProbeOutcome,
    pub rows: Vec<CartItem>,
}

pub async fn cart_columns<C: ConnectionTrait>(conn: &C) -> Result<Vec<ColumnInfo>, DbErr> {
    db::fetch_all(conn, CART_COLUMNS, vec![]).await
}

pub async fn cart_count<C: ConnectionTrait>(conn: &C) -> Result<i64, DbErr> {
    let row: CountRow = db::fetch_one(conn, CART_COUNT, vec![]).await?;
    Ok(row.count)
}

pub async fn dump_cart<C: ConnectionTrait>(conn: &C) -> Result<Vec<CartItem>, DbErr> {
    db::fetch_all(conn, CART_DUMP, vec![]).await
}

pub async fn user_summaries<C: ConnectionTrait>(conn: &C) -> Result<Vec<UserBrief>, DbErr> {
    db::fetch_all(conn, USER_SUMMARIES, vec![]).await
}

pub async fn probe_insert<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<ProbeOutcome, DbErr> {
    let inserted: Option<CartItem> = db::fetch_optional(
        conn,
        PROBE_INSERT,
        vec![user_id.into(), product_id.into(), quantity.into()],
    )
    .await?;
    Ok(match inserted {
        Some(row) => ProbeOutcome::Inserted(row),
        None => ProbeOutcome::AlreadyPresent,
    })
}

/// Schema, count, one conflict-suppressed insert of `(1, 1, 1)`, final dump.
pub async fn run_cart_smoke<C: ConnectionTrait>(conn: &C) -> Result<CartReport, DbErr> {
    let columns = cart_columns(conn).await?;
    for column in &columns {
        tracing::info!(column = %column.column_name, data_type = %column.data_type, "cart column");
    }

    let row_count = cart_count(conn).await?;
    tracing::info!(row_count, "cart rows before probe");

    let probe = probe_insert(conn, 1, 1, 1).await?;
    match &probe {
        ProbeOutcome::Inserted(row) => tracing::info!(?row, "probe row inserted"),
        ProbeOutcome::AlreadyPresent => {
            tracing::info!("probe row already present (unique key conflict)")
        }
    }

    let rows = dump_cart(conn).await?;
    tracing::info!(rows = rows.len(), "cart rows after probe");

    Ok(CartReport {
        columns,
        row_count,
        probe,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, Transaction, Value};

    use super::*;
    use crate::test_support::{mock_db, row};

    fn cart_row(id: i32) -> std::collections::BTreeMap<&'static str, Value> {
        row([
            ("id", id.into()),
            ("user_id", 1_i32.into()),
            ("product_id", 1_i32.into()),
            ("quantity", 1_i32.into()),
            ("selected_memory", "".into()),
            ("created_at", Utc::now().into()),
        ])
    }

    #[tokio::test]
    async fn smoke_run_reports_inserted_probe() {
        let conn = mock_db()
            .append_query_results([vec![
                row([("column_name", "id".into()), ("data_type", "integer".into())]),
                row([("column_name", "user_id".into()), ("data_type", "integer".into())]),
            ]])
            .append_query_results([vec![row([("count", 0_i64.into())])]])
            .append_query_results([vec![cart_row(1)]])
            .append_query_results([vec![cart_row(1)]])
            .into_connection();

        let report = run_cart_smoke(&conn).await.unwrap();

        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[1].column_name, "user_id");
        assert_eq!(report.row_count, 0);
        assert!(matches!(report.probe, ProbeOutcome::Inserted(ref r) if r.id == 1));
        assert_eq!(report.rows.len(), 1);

        let log = conn.into_transaction_log();
        assert_eq!(
            log[2],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                PROBE_INSERT,
                [Value::from(1_i32), Value::from(1_i32), Value::from(1_i32)],
            )
        );
    }

    #[tokio::test]
    async fn conflicting_probe_is_reported_as_present() {
        let conn = mock_db()
            .append_query_results([Vec::<std::collections::BTreeMap<&str, Value>>::new()])
            .into_connection();

        let outcome = probe_insert(&conn, 1, 1, 1).await.unwrap();
        assert!(matches!(outcome, ProbeOutcome::AlreadyPresent));
    }
}
