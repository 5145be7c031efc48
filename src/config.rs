// src/config.rs
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::AppError;

/// Which table layout the service maps products onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaVariant {
    /// `product` joined one-to-one onto `product_detail`.
    #[default]
    Detailed,
    /// A single `product` table with just `sku` and `name`.
    Flat,
}

impl FromStr for SchemaVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(SchemaVariant::Detailed),
            "flat" => Ok(SchemaVariant::Flat),
            other => Err(AppError::config(format!(
                "SCHEMA_VARIANT must be `detailed` or `flat`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub variant: SchemaVariant,
    pub max_connections: u32,
}

impl Config {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| AppError::config("DATABASE_URL must be set"))?;

        let host = match lookup("HOST") {
            Some(h) => h
                .parse()
                .map_err(|_| AppError::config(format!("HOST is not an IP address: {h}")))?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match lookup("PORT") {
            Some(p) => p
                .parse()
                .map_err(|_| AppError::config(format!("PORT is not a valid port: {p}")))?,
            None => 3000,
        };

        let variant = match lookup("SCHEMA_VARIANT") {
            Some(v) => v.parse()?,
            None => SchemaVariant::default(),
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(n) => n.parse().map_err(|_| {
                AppError::config(format!("DB_MAX_CONNECTIONS is not a number: {n}"))
            })?,
            None => 5,
        };

        Ok(Self {
            database_url,
            host,
            port,
            variant,
            max_connections,
        })
    }
}
