use std::fmt::Debug;

use adm_common::hashing::sha256_hex;
use log::debug;

use crate::{
    db_types::AdminUser,
    traits::{AuthApiError, AuthManagement},
};

/// Authenticates admin principals against the stored credentials.
pub struct AuthApi<B> {
    db: B,
}

impl<B: Debug> Debug for AuthApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthApi ({:?})", self.db)
    }
}

impl<B> AuthApi<B>
where B: AuthManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Looks up the principal by email and compares password digests. Digest equality is the sole
    /// authentication check. An unknown email and a digest mismatch are indistinguishable to the
    /// caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, AuthApiError> {
        let user = self.db.fetch_admin_user(email).await?.ok_or(AuthApiError::InvalidCredentials)?;
        if user.password != sha256_hex(password) {
            debug!("🔐️ Password digest mismatch for {email}");
            return Err(AuthApiError::InvalidCredentials);
        }
        Ok(user)
    }
}
