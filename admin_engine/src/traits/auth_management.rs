use thiserror::Error;

use crate::db_types::AdminUser;

#[derive(Debug, Clone, Error)]
pub enum AuthApiError {
    /// Unknown email and wrong password collapse into this one variant on purpose, so a caller
    /// cannot probe which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for AuthApiError {
    fn from(e: sqlx::Error) -> Self {
        AuthApiError::DatabaseError(e.to_string())
    }
}

/// Behaviour needed to authenticate an admin principal.
#[allow(async_fn_in_trait)]
pub trait AuthManagement {
    /// Fetches the admin user record for the given email, with the role label resolved from the
    /// roles table. Returns `None` when no user has that email.
    async fn fetch_admin_user(&self, email: &str) -> Result<Option<AdminUser>, AuthApiError>;
}
