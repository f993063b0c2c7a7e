//! Parameterized query execution shared by handlers, the importer and the
//! diagnostics job.
//!
//! Every statement uses positional `$n` placeholders and an ordered parameter
//! list. Rows are decoded by column name into any [`FromQueryResult`] type.
//! Errors are returned as-is; nothing here retries.

use anyhow::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, FromQueryResult, Statement, Value,
};

pub type OrmConn = DatabaseConnection;

/// Create the process-wide SeaORM connection pool.
pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Apply the embedded SQL migrations in `migrations/`.
pub async fn run_migrations(conn: &OrmConn) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(conn.get_postgres_connection_pool())
        .await?;
    Ok(())
}

fn statement<C: ConnectionTrait>(conn: &C, sql: &str, params: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(conn.get_database_backend(), sql, params)
}

pub async fn fetch_all<T, C>(conn: &C, sql: &str, params: Vec<Value>) -> Result<Vec<T>, DbErr>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    T::find_by_statement(statement(conn, sql, params))
        .all(conn)
        .await
}

pub async fn fetch_optional<T, C>(
    conn: &C,
    sql: &str,
    params: Vec<Value>,
) -> Result<Option<T>, DbErr>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    T::find_by_statement(statement(conn, sql, params))
        .one(conn)
        .await
}

/// Like [`fetch_optional`], but a missing row is an error.
pub async fn fetch_one<T, C>(conn: &C, sql: &str, params: Vec<Value>) -> Result<T, DbErr>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    fetch_optional(conn, sql, params)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("no row returned by: {sql}")))
}

/// Run a statement that returns no rows; yields the number of rows affected.
pub async fn execute<C: ConnectionTrait>(
    conn: &C,
    sql: &str,
    params: Vec<Value>,
) -> Result<u64, DbErr> {
    let result = conn.execute(statement(conn, sql, params)).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockExecResult, Transaction};

    use super::*;
    use crate::test_support::{mock_db, row};

    #[derive(Debug, FromQueryResult, PartialEq)]
    struct Named {
        id: i32,
        name: String,
    }

    #[tokio::test]
    async fn fetch_all_decodes_rows_by_column_name() {
        let conn = mock_db()
            .append_query_results([vec![
                row([("id", 1_i32.into()), ("name", "first".into())]),
                row([("id", 2_i32.into()), ("name", "second".into())]),
            ]])
            .into_connection();

        let rows: Vec<Named> =
            fetch_all(&conn, "SELECT id, name FROM t WHERE x = $1", vec![7_i32.into()])
                .await
                .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Named { id: 2, name: "second".into() });
        assert_eq!(
            conn.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                "SELECT id, name FROM t WHERE x = $1",
                [Value::from(7_i32)],
            )]
        );
    }

    #[tokio::test]
    async fn fetch_one_reports_missing_row() {
        let conn = mock_db()
            .append_query_results([Vec::<std::collections::BTreeMap<&str, Value>>::new()])
            .into_connection();

        let err = fetch_one::<Named, _>(&conn, "SELECT id, name FROM t", vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }

    #[tokio::test]
    async fn execute_returns_rows_affected() {
        let conn = mock_db()
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let affected = execute(&conn, "DELETE FROM t", vec![]).await.unwrap();
        assert_eq!(affected, 3);
    }

    #[tokio::test]
    async fn store_errors_propagate_unchanged() {
        let conn = mock_db()
            .append_exec_errors([DbErr::Custom("connection reset".into())])
            .into_connection();

        let err = execute(&conn, "DELETE FROM t", vec![]).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
