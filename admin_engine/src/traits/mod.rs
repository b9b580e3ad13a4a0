//! Backend contracts.
//!
//! These traits define what a database backend must expose in order to sit behind the admin
//! gateway. The HTTP layer never touches a backend directly; it goes through the API wrappers in
//! [`crate::api`], which are generic over these traits. That seam is also what the endpoint tests
//! mock.
//!
//! * [`AuthManagement`] looks up the principal record used for login.
//! * [`CountryManagement`], [`ProductManagement`], [`RoleManagement`] and [`UserManagement`] are
//!   the per-resource CRUD contracts. Each follows the same shape: a count + page pair feeding
//!   the listing contract, and create/fetch/update/delete primitives where update and delete
//!   report the number of rows affected (zero rows is surfaced as not-found at the boundary, not
//!   here).

mod auth_management;
mod resource_management;

pub use auth_management::{AuthApiError, AuthManagement};
pub use resource_management::{
    AdminApiError,
    CountryManagement,
    ProductManagement,
    RoleManagement,
    UserManagement,
};
