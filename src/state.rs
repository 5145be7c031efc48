// src/state.rs
use sqlx::SqlitePool;

use crate::config::SchemaVariant;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub variant: SchemaVariant,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, variant: SchemaVariant) -> Self {
        Self { db_pool, variant }
    }
}
