//! Admin gateway engine
//!
//! The engine is the data layer behind the admin gateway HTTP server. It is provider-agnostic:
//! the server only ever talks to the traits defined in [`mod@traits`], and a concrete backend
//! (currently SQLite, with a `postgres` feature gate) implements them.
//!
//! The crate is divided into three sections:
//! 1. Database management ([`mod@db`] behind the backend feature flags). You should never need to
//!    access the database directly; the exception is the data types in [`mod@db_types`], which are
//!    public.
//! 2. The resource APIs ([`mod@api`]): thin, typed wrappers that the HTTP layer injects as
//!    application state. [`AuthApi`] also owns the password digest comparison.
//! 3. The paginated listing contract ([`mod@paging`]): the one piece of reusable logic shared by
//!    every list endpoint, independent of entity type.

mod api;
mod db;

pub mod db_types;
pub mod paging;
pub mod traits;

pub use api::{AuthApi, CountryApi, ProductApi, RoleApi, UserApi};
#[cfg(feature = "sqlite")]
pub use db::sqlite::{
    db::{db_url, run_migrations},
    SqliteDatabase,
};
