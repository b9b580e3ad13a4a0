use admin_engine::{
    db_types::{AdminUser, Country, NewCountry, NewProduct, NewUser, Product, ProductSummary, RoleRecord, User, UserSummary},
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
use mockall::mock;

mock! {
    pub AuthManager {}
    impl AuthManagement for AuthManager {
        async fn fetch_admin_user(&self, email: &str) -> Result<Option<AdminUser>, AuthApiError>;
    }
}

mock! {
    pub CountryManager {}
    impl CountryManagement for CountryManager {
        async fn count_countries(&self) -> Result<i64, AdminApiError>;
        async fn fetch_countries(&self, limit: i64, offset: i64) -> Result<Vec<Country>, AdminApiError>;
        async fn create_country(&self, country: &NewCountry) -> Result<Country, AdminApiError>;
        async fn fetch_country(&self, code: i64) -> Result<Option<Country>, AdminApiError>;
        async fn update_country(&self, code: i64, country: &NewCountry) -> Result<u64, AdminApiError>;
        async fn delete_country(&self, code: i64) -> Result<u64, AdminApiError>;
    }
}

mock! {
    pub ProductManager {}
    impl ProductManagement for ProductManager {
        async fn count_products(&self) -> Result<i64, AdminApiError>;
        async fn fetch_products(&self, limit: i64, offset: i64) -> Result<Vec<ProductSummary>, AdminApiError>;
        async fn create_product(&self, product: &NewProduct) -> Result<Product, AdminApiError>;
        async fn fetch_product(&self, id: i64) -> Result<Option<Product>, AdminApiError>;
        async fn update_product(&self, id: i64, product: &NewProduct) -> Result<u64, AdminApiError>;
        async fn delete_product(&self, id: i64) -> Result<u64, AdminApiError>;
    }
}

mock! {
    pub RoleManager {}
    impl RoleManagement for RoleManager {
        async fn count_roles(&self) -> Result<i64, AdminApiError>;
        async fn fetch_roles(&self, limit: i64, offset: i64) -> Result<Vec<RoleRecord>, AdminApiError>;
        async fn create_role(&self, name: &str) -> Result<RoleRecord, AdminApiError>;
        async fn fetch_role(&self, id: i64) -> Result<Option<RoleRecord>, AdminApiError>;
        async fn update_role(&self, id: i64, name: &str) -> Result<u64, AdminApiError>;
        async fn delete_role(&self, id: i64) -> Result<u64, AdminApiError>;
    }
}

mock! {
    pub UserManager {}
    impl UserManagement for UserManager {
        async fn count_users(&self) -> Result<i64, AdminApiError>;
        async fn fetch_users(&self, limit: i64, offset: i64) -> Result<Vec<UserSummary>, AdminApiError>;
        async fn create_user(&self, user: &NewUser) -> Result<User, AdminApiError>;
        async fn fetch_user(&self, id: i64) -> Result<Option<User>, AdminApiError>;
        async fn update_user(&self, id: i64, user: &NewUser) -> Result<u64, AdminApiError>;
        async fn delete_user(&self, id: i64) -> Result<u64, AdminApiError>;
        async fn delete_users(&self, ids: &[i64]) -> Result<u64, AdminApiError>;
    }
}
