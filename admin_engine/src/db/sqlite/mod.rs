//! SQLite backend for the admin gateway engine.

mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
