use chrono::{DateTime, Utc};
use sea_orm::{DbErr, FromQueryResult};

use crate::db::{self, OrmConn};

pub const DATABASE_TIME: &str = "SELECT NOW() AS time";

#[derive(Debug, FromQueryResult)]
pub struct DatabaseTime {
    pub time: DateTime<Utc>,
}

/// One round trip to the store.
pub async fn database_time(conn: &OrmConn) -> Result<DateTime<Utc>, DbErr> {
    let row: DatabaseTime = db::fetch_one(conn, DATABASE_TIME, vec![]).await?;
    Ok(row.time)
}
