use thiserror::Error;

use crate::db_types::{Country, NewCountry, NewProduct, NewUser, Product, ProductSummary, RoleRecord, User, UserSummary};

#[derive(Debug, Clone, Error)]
pub enum AdminApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for AdminApiError {
    fn from(e: sqlx::Error) -> Self {
        AdminApiError::DatabaseError(e.to_string())
    }
}

//--------------------------------------     Countries       ---------------------------------------------------------

#[allow(async_fn_in_trait)]
pub trait CountryManagement {
    async fn count_countries(&self) -> Result<i64, AdminApiError>;
    /// One page of countries, ordered by country code.
    async fn fetch_countries(&self, limit: i64, offset: i64) -> Result<Vec<Country>, AdminApiError>;
    /// Inserts a country and returns the stored row, including the assigned code.
    async fn create_country(&self, country: &NewCountry) -> Result<Country, AdminApiError>;
    async fn fetch_country(&self, code: i64) -> Result<Option<Country>, AdminApiError>;
    /// Returns the number of rows affected. Zero means the code did not match anything.
    async fn update_country(&self, code: i64, country: &NewCountry) -> Result<u64, AdminApiError>;
    async fn delete_country(&self, code: i64) -> Result<u64, AdminApiError>;
}

//--------------------------------------     Products       ----------------------------------------------------------

#[allow(async_fn_in_trait)]
pub trait ProductManagement {
    async fn count_products(&self) -> Result<i64, AdminApiError>;
    /// One page of products, newest first.
    async fn fetch_products(&self, limit: i64, offset: i64) -> Result<Vec<ProductSummary>, AdminApiError>;
    async fn create_product(&self, product: &NewProduct) -> Result<Product, AdminApiError>;
    async fn fetch_product(&self, id: i64) -> Result<Option<Product>, AdminApiError>;
    async fn update_product(&self, id: i64, product: &NewProduct) -> Result<u64, AdminApiError>;
    async fn delete_product(&self, id: i64) -> Result<u64, AdminApiError>;
}

//--------------------------------------     Roles       -------------------------------------------------------------

#[allow(async_fn_in_trait)]
pub trait RoleManagement {
    async fn count_roles(&self) -> Result<i64, AdminApiError>;
    async fn fetch_roles(&self, limit: i64, offset: i64) -> Result<Vec<RoleRecord>, AdminApiError>;
    async fn create_role(&self, name: &str) -> Result<RoleRecord, AdminApiError>;
    async fn fetch_role(&self, id: i64) -> Result<Option<RoleRecord>, AdminApiError>;
    async fn update_role(&self, id: i64, name: &str) -> Result<u64, AdminApiError>;
    async fn delete_role(&self, id: i64) -> Result<u64, AdminApiError>;
}

//--------------------------------------     Users       -------------------------------------------------------------

#[allow(async_fn_in_trait)]
pub trait UserManagement {
    async fn count_users(&self) -> Result<i64, AdminApiError>;
    /// One page of user summaries, newest first.
    async fn fetch_users(&self, limit: i64, offset: i64) -> Result<Vec<UserSummary>, AdminApiError>;
    /// Inserts a user. The plaintext password in `user` is digested before it is stored.
    async fn create_user(&self, user: &NewUser) -> Result<User, AdminApiError>;
    async fn fetch_user(&self, id: i64) -> Result<Option<User>, AdminApiError>;
    async fn update_user(&self, id: i64, user: &NewUser) -> Result<u64, AdminApiError>;
    async fn delete_user(&self, id: i64) -> Result<u64, AdminApiError>;
    /// Deletes every user whose id appears in `ids` and returns the number of rows removed.
    async fn delete_users(&self, ids: &[i64]) -> Result<u64, AdminApiError>;
}
