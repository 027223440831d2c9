use crate::error::Error;
use serenity::all::UserId;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open the SQLite database and apply the schema script.
///
/// The pool holds a single connection, so every query issued through it is
/// serialized.
pub async fn init_pool(database_path: &Path, schema_path: &Path) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);
    let pool = connect(options).await?;

    let schema = tokio::fs::read_to_string(schema_path)
        .await
        .map_err(|source| Error::Io {
            path: schema_path.to_path_buf(),
            source,
        })?;
    apply_schema(&pool, &schema).await?;

    info!(
        database = %database_path.display(),
        schema = %schema_path.display(),
        "Database initialized and schema applied"
    );

    Ok(pool)
}

pub async fn connect(options: SqliteConnectOptions) -> Result<SqlitePool, Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Run every statement of `schema` in one transaction.
pub async fn apply_schema(pool: &SqlitePool, schema: &str) -> Result<(), Error> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(schema).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

pub async fn is_blacklisted(pool: &SqlitePool, user_id: UserId) -> Result<bool, Error> {
    let row: Option<(String,)> = sqlx::query_as("SELECT user_id FROM blacklist WHERE user_id = ?")
        .bind(user_id.get().to_string())
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Returns `false` if the user was already blacklisted.
pub async fn add_to_blacklist(pool: &SqlitePool, user_id: UserId) -> Result<bool, Error> {
    let result = sqlx::query("INSERT OR IGNORE INTO blacklist (user_id) VALUES (?)")
        .bind(user_id.get().to_string())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns `false` if the user was not blacklisted.
pub async fn remove_from_blacklist(pool: &SqlitePool, user_id: UserId) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM blacklist WHERE user_id = ?")
        .bind(user_id.get().to_string())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn blacklisted_users(pool: &SqlitePool) -> Result<Vec<UserId>, Error> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT user_id FROM blacklist ORDER BY created_at, user_id")
            .fetch_all(pool)
            .await?;

    rows.into_iter()
        .map(|(id,)| {
            id.parse::<u64>()
                .map(UserId::new)
                .map_err(|e| Error::Database(sqlx::Error::Decode(Box::new(e))))
        })
        .collect()
}
