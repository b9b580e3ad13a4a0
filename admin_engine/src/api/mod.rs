//! The engine's public API wrappers.
//!
//! Each wrapper owns a backend instance (anything implementing the matching trait in
//! [`crate::traits`]) and is registered as application state by the HTTP server. The wrappers are
//! deliberately thin; the only real logic they carry is the password digest comparison in
//! [`AuthApi::login`] and the listing contract plumbing in the `list` methods.

mod auth_api;
mod resources_api;

pub use auth_api::AuthApi;
pub use resources_api::{CountryApi, ProductApi, RoleApi, UserApi};
