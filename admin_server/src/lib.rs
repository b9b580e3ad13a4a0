//! # Admin gateway server
//!
//! The HTTP front-end for the admin panel. It is responsible for:
//! * authenticating admins (`POST /api/v1/login`) and issuing signed access tokens,
//! * gating every other `/api/v1` route behind the access-control middleware,
//! * exposing paginated CRUD endpoints for countries, roles, products and users.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more
//! information.

pub mod auth;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod helpers;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
