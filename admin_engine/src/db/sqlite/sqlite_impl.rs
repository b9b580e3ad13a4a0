//! `SqliteDatabase` is a concrete backend for the admin gateway engine. It implements every trait
//! in the [`traits`](crate::traits) module on top of a SQLite connection pool.

use std::fmt::Debug;

use sqlx::SqlitePool;

use super::db::{auth, countries, new_pool, products, roles, users};
use crate::{
    db_types::{Country, NewCountry, NewProduct, NewUser, Product, ProductSummary, RoleRecord, User, UserSummary},
    db_types::AdminUser,
    traits::{
        AdminApiError,
        AuthApiError,
        AuthManagement,
        CountryManagement,
        ProductManagement,
        RoleManagement,
        UserManagement,
    },
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database backend with a pool of `max_connections` connections.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl AuthManagement for SqliteDatabase {
    async fn fetch_admin_user(&self, email: &str) -> Result<Option<AdminUser>, AuthApiError> {
        let mut conn = self.pool.acquire().await?;
        auth::fetch_admin_user(email, &mut conn).await
    }
}

impl CountryManagement for SqliteDatabase {
    async fn count_countries(&self) -> Result<i64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        countries::count_countries(&mut conn).await
    }

    async fn fetch_countries(&self, limit: i64, offset: i64) -> Result<Vec<Country>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        countries::fetch_countries(limit, offset, &mut conn).await
    }

    async fn create_country(&self, country: &NewCountry) -> Result<Country, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        countries::create_country(country, &mut conn).await
    }

    async fn fetch_country(&self, code: i64) -> Result<Option<Country>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        countries::fetch_country(code, &mut conn).await
    }

    async fn update_country(&self, code: i64, country: &NewCountry) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        countries::update_country(code, country, &mut conn).await
    }

    async fn delete_country(&self, code: i64) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        countries::delete_country(code, &mut conn).await
    }
}

impl ProductManagement for SqliteDatabase {
    async fn count_products(&self) -> Result<i64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        products::count_products(&mut conn).await
    }

    async fn fetch_products(&self, limit: i64, offset: i64) -> Result<Vec<ProductSummary>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_products(limit, offset, &mut conn).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        products::create_product(product, &mut conn).await
    }

    async fn fetch_product(&self, id: i64) -> Result<Option<Product>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_product(id, &mut conn).await
    }

    async fn update_product(&self, id: i64, product: &NewProduct) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        products::update_product(id, product, &mut conn).await
    }

    async fn delete_product(&self, id: i64) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        products::delete_product(id, &mut conn).await
    }
}

impl RoleManagement for SqliteDatabase {
    async fn count_roles(&self) -> Result<i64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        roles::count_roles(&mut conn).await
    }

    async fn fetch_roles(&self, limit: i64, offset: i64) -> Result<Vec<RoleRecord>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        roles::fetch_roles(limit, offset, &mut conn).await
    }

    async fn create_role(&self, name: &str) -> Result<RoleRecord, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        roles::create_role(name, &mut conn).await
    }

    async fn fetch_role(&self, id: i64) -> Result<Option<RoleRecord>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        roles::fetch_role(id, &mut conn).await
    }

    async fn update_role(&self, id: i64, name: &str) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        roles::update_role(id, name, &mut conn).await
    }

    async fn delete_role(&self, id: i64) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        roles::delete_role(id, &mut conn).await
    }
}

impl UserManagement for SqliteDatabase {
    async fn count_users(&self) -> Result<i64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::count_users(&mut conn).await
    }

    async fn fetch_users(&self, limit: i64, offset: i64) -> Result<Vec<UserSummary>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_users(limit, offset, &mut conn).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::create_user(user, &mut conn).await
    }

    async fn fetch_user(&self, id: i64) -> Result<Option<User>, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_user(id, &mut conn).await
    }

    async fn update_user(&self, id: i64, user: &NewUser) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::update_user(id, user, &mut conn).await
    }

    async fn delete_user(&self, id: i64) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::delete_user(id, &mut conn).await
    }

    async fn delete_users(&self, ids: &[i64]) -> Result<u64, AdminApiError> {
        let mut conn = self.pool.acquire().await?;
        users::delete_users(ids, &mut conn).await
    }
}
