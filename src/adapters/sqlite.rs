use crate::core::{Record, Store};
use crate::utils::error::Result;
use serde_json::Value;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column, Connection, Database, Row, Sqlite, TypeInfo, ValueRef};
use std::str::FromStr;
use tokio::sync::Mutex;

/// Bundled table definitions, safe to apply more than once.
pub const SCHEMA: &str = include_str!("../../db/schema.sql");

/// The single connection the tracker talks to for its whole lifetime.
pub struct SqliteStore {
    conn: Mutex<SqliteConnection>,
}

impl SqliteStore {
    /// Opens `url` with foreign keys enforced. Without `create_if_missing`
    /// a missing database file is an error.
    pub async fn connect(url: &str, create_if_missing: bool) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(create_if_missing)
            .foreign_keys(true);

        let conn = SqliteConnection::connect_with(&options).await?;
        tracing::info!("Connected to {}", url);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Fresh private database with the schema applied.
    pub async fn in_memory() -> Result<Self> {
        let store = Self::connect("sqlite::memory:", true).await?;
        store.apply_schema().await?;
        Ok(store)
    }

    pub async fn apply_schema(&self) -> Result<()> {
        let mut conn = self.conn.lock().await;
        sqlx::raw_sql(SCHEMA).execute(&mut *conn).await?;
        tracing::debug!("Schema applied");
        Ok(())
    }
}

fn bind_params<'q>(
    statement: &'q str,
    params: &[Value],
) -> Query<'q, Sqlite, <Sqlite as Database>::Arguments<'q>> {
    let mut query = sqlx::query(statement);
    for param in params {
        query = match param {
            Value::Null => query.bind(None::<i64>),
            Value::Bool(b) => query.bind(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => query.bind(i),
                None => query.bind(n.as_f64()),
            },
            Value::String(s) => query.bind(s.clone()),
            other => query.bind(other.to_string()),
        };
    }
    query
}

fn decode_row(row: &SqliteRow) -> Result<Record> {
    let mut columns = Vec::with_capacity(row.len());
    let mut values = Vec::with_capacity(row.len());

    for column in row.columns() {
        let index = column.ordinal();
        columns.push(column.name().to_string());

        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            values.push(Value::Null);
            continue;
        }

        // Storage class of the value itself, not the declared column type.
        let kind = raw.type_info().name().to_string();
        let value = match kind.as_str() {
            "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
            "REAL" | "NUMERIC" => Value::from(row.try_get_unchecked::<f64, _>(index)?),
            "BLOB" => {
                let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
                Value::from(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => Value::from(row.try_get_unchecked::<String, _>(index)?),
        };
        values.push(value);
    }

    Ok(Record::new(columns, values))
}

impl Store for SqliteStore {
    async fn fetch(&self, statement: &str, params: &[Value]) -> Result<Vec<Record>> {
        tracing::debug!(params = params.len(), "fetch: {}", statement);
        let mut conn = self.conn.lock().await;
        let rows = bind_params(statement, params).fetch_all(&mut *conn).await?;
        rows.iter().map(decode_row).collect()
    }

    async fn execute(&self, statement: &str, params: &[Value]) -> Result<u64> {
        tracing::debug!(params = params.len(), "execute: {}", statement);
        let mut conn = self.conn.lock().await;
        let result = bind_params(statement, params).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
