//! Per-resource API wrappers. These are intentionally repetitive: each resource exposes the same
//! list-via-contract method plus CRUD pass-throughs, and the repetition stays here rather than
//! leaking into the HTTP handlers.

use std::fmt::Debug;

use crate::{
    db_types::{Country, NewCountry, NewProduct, NewUser, Product, ProductSummary, RoleRecord, User, UserSummary},
    paging::{paged_fetch, PagedFetchError, PagedResult, PageParams},
    traits::{AdminApiError, CountryManagement, ProductManagement, RoleManagement, UserManagement},
};

//--------------------------------------     CountryApi       --------------------------------------------------------

pub struct CountryApi<B> {
    db: B,
}

impl<B: Debug> Debug for CountryApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CountryApi ({:?})", self.db)
    }
}

impl<B> CountryApi<B>
where B: CountryManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: PageParams) -> Result<PagedResult<Country>, PagedFetchError<AdminApiError>> {
        paged_fetch(params, self.db.count_countries(), |limit, offset| self.db.fetch_countries(limit, offset)).await
    }

    pub async fn create(&self, country: &NewCountry) -> Result<Country, AdminApiError> {
        self.db.create_country(country).await
    }

    pub async fn get(&self, code: i64) -> Result<Option<Country>, AdminApiError> {
        self.db.fetch_country(code).await
    }

    pub async fn update(&self, code: i64, country: &NewCountry) -> Result<u64, AdminApiError> {
        self.db.update_country(code, country).await
    }

    pub async fn delete(&self, code: i64) -> Result<u64, AdminApiError> {
        self.db.delete_country(code).await
    }
}

//--------------------------------------     ProductApi       --------------------------------------------------------

pub struct ProductApi<B> {
    db: B,
}

impl<B: Debug> Debug for ProductApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProductApi ({:?})", self.db)
    }
}

impl<B> ProductApi<B>
where B: ProductManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: PageParams) -> Result<PagedResult<ProductSummary>, PagedFetchError<AdminApiError>> {
        paged_fetch(params, self.db.count_products(), |limit, offset| self.db.fetch_products(limit, offset)).await
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product, AdminApiError> {
        self.db.create_product(product).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Product>, AdminApiError> {
        self.db.fetch_product(id).await
    }

    pub async fn update(&self, id: i64, product: &NewProduct) -> Result<u64, AdminApiError> {
        self.db.update_product(id, product).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AdminApiError> {
        self.db.delete_product(id).await
    }
}

//--------------------------------------     RoleApi       -----------------------------------------------------------

pub struct RoleApi<B> {
    db: B,
}

impl<B: Debug> Debug for RoleApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoleApi ({:?})", self.db)
    }
}

impl<B> RoleApi<B>
where B: RoleManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: PageParams) -> Result<PagedResult<RoleRecord>, PagedFetchError<AdminApiError>> {
        paged_fetch(params, self.db.count_roles(), |limit, offset| self.db.fetch_roles(limit, offset)).await
    }

    pub async fn create(&self, name: &str) -> Result<RoleRecord, AdminApiError> {
        self.db.create_role(name).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<RoleRecord>, AdminApiError> {
        self.db.fetch_role(id).await
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<u64, AdminApiError> {
        self.db.update_role(id, name).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AdminApiError> {
        self.db.delete_role(id).await
    }
}

//--------------------------------------     UserApi       -----------------------------------------------------------

pub struct UserApi<B> {
    db: B,
}

impl<B: Debug> Debug for UserApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserApi ({:?})", self.db)
    }
}

impl<B> UserApi<B>
where B: UserManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn list(&self, params: PageParams) -> Result<PagedResult<UserSummary>, PagedFetchError<AdminApiError>> {
        paged_fetch(params, self.db.count_users(), |limit, offset| self.db.fetch_users(limit, offset)).await
    }

    pub async fn create(&self, user: &NewUser) -> Result<User, AdminApiError> {
        self.db.create_user(user).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, AdminApiError> {
        self.db.fetch_user(id).await
    }

    pub async fn update(&self, id: i64, user: &NewUser) -> Result<u64, AdminApiError> {
        self.db.update_user(id, user).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AdminApiError> {
        self.db.delete_user(id).await
    }

    pub async fn delete_many(&self, ids: &[i64]) -> Result<u64, AdminApiError> {
        self.db.delete_users(ids).await
    }
}
