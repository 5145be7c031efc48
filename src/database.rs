// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

use crate::config::SchemaVariant;

pub const CREATE_PRODUCT_DETAIL: &str = "CREATE TABLE IF NOT EXISTS product_detail (
    detail_id INTEGER PRIMARY KEY,
    detail    TEXT
)";

pub const CREATE_PRODUCT: &str = "CREATE TABLE IF NOT EXISTS product (
    sku       INTEGER PRIMARY KEY,
    name      TEXT,
    detail_id INTEGER UNIQUE REFERENCES product_detail (detail_id)
)";

pub const CREATE_FLAT_PRODUCT: &str = "CREATE TABLE IF NOT EXISTS product (
    sku  INTEGER PRIMARY KEY,
    name TEXT
)";

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Creates the tables of `variant` if they are not there yet.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &SqlitePool, variant: SchemaVariant) -> Result<(), sqlx::Error> {
    match variant {
        SchemaVariant::Detailed => {
            sqlx::query(CREATE_PRODUCT_DETAIL).execute(pool).await?;
            sqlx::query(CREATE_PRODUCT).execute(pool).await?;
        }
        SchemaVariant::Flat => {
            sqlx::query(CREATE_FLAT_PRODUCT).execute(pool).await?;
        }
    }
    info!(?variant, "Product schema ready");
    Ok(())
}

// An in-memory database lives as long as its connection, so tests pin the pool to one.
#[cfg(test)]
pub async fn memory_pool(variant: SchemaVariant) -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    init_schema(&pool, variant).await.unwrap();
    pool
}
