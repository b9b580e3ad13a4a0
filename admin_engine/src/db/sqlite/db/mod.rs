//! # SQLite database methods
//!
//! This module contains the "low-level" SQLite interactions, one module per table. All of them
//! are plain functions (rather than stateful structs) that accept a `&mut SqliteConnection`, so
//! callers can hand in a pooled connection or a transaction without any other changes.
//!
//! Clients should not call these directly; go through the trait methods on
//! [`SqliteDatabase`](crate::SqliteDatabase) instead.

use std::env;

use log::info;
use sqlx::{sqlite::SqlitePoolOptions, Error as SqlxError, SqlitePool};

pub mod auth;
pub mod countries;
pub mod products;
pub mod roles;
pub mod users;

const SQLITE_DB_URL: &str = "sqlite://data/admin.db";

pub fn db_url() -> String {
    let result = env::var("ADM_DATABASE_URL").unwrap_or_else(|_| {
        info!("ADM_DATABASE_URL is not set. Using the default.");
        SQLITE_DB_URL.to_string()
    });
    info!("Using database URL: {result}");
    result
}

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, SqlxError> {
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect(url).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqlxError> {
    sqlx::migrate!("./src/db/sqlite/migrations").run(pool).await?;
    info!("Database migrations are up to date");
    Ok(())
}
