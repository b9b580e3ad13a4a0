//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Every handler is generic over the backend trait it needs, so the endpoint tests can inject
//! mocks without a database. Authentication is not handled here; the `/api/v1` scope is wrapped in
//! the access-control middleware at assembly time (see [server](crate::server)).

use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use admin_engine::{
    db_types::{NewCountry, NewProduct, NewUser},
    traits::{AuthManagement, CountryManagement, ProductManagement, RoleManagement, UserManagement},
    AuthApi,
    CountryApi,
    ProductApi,
    RoleApi,
    UserApi,
};

use crate::{
    auth::{JwtClaims, TokenIssuer},
    data_objects::{BulkDeleteRequest, JsonResponse, LoginRequest, LoginResult, PageQuery, PaginatedResponse, RolePayload},
    errors::ServerError,
    helpers::{map_list_error, parse_body},
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Auth  ----------------------------------------------------
route!(admin_login => Post "/api/v1/login" impl AuthManagement);
/// Authenticates an admin and issues a signed access token.
///
/// Credentials arrive as `{"email": ..., "password": ...}`. On success the response data carries
/// the token, the email it was issued for, and the expiry date. Any login failure, including a
/// backend failure during the lookup, is reported as 401 so the endpoint does not reveal which
/// part of the check failed.
pub async fn admin_login<TAuthManagement: AuthManagement>(
    api: web::Data<AuthApi<TAuthManagement>>,
    signer: web::Data<TokenIssuer>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let login: LoginRequest = parse_body(&body, "Invalid request body")?;
    let user = api.login(&login.email, &login.password).await.map_err(|e| {
        debug!("🔐️ Login failed for {}. {e}", login.email);
        ServerError::LoginFailed(e.to_string())
    })?;
    let (token, expires_at) = signer.issue_token(user.id, &user.email, user.role.clone())?;
    info!("🔑️ {} logged in", user.email);
    let result =
        LoginResult { token, user_email: user.email, expire_date: expires_at.format("%Y-%m-%d").to_string() };
    Ok(HttpResponse::Ok().json(JsonResponse::ok("Authenticated successfully", result)))
}

//----------------------------------------------   Countries  ----------------------------------------------------

route!(list_countries => Get "/country" impl CountryManagement);
pub async fn list_countries<TCountryManagement: CountryManagement>(
    query: web::Query<PageQuery>,
    api: web::Data<CountryApi<TCountryManagement>>,
) -> Result<HttpResponse, ServerError> {
    let result = api.list(query.page_params()).await.map_err(map_list_error)?;
    if result.rows.is_empty() {
        return Err(ServerError::NoRecordFound("Data not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(PaginatedResponse::data_found(result)))
}

route!(create_country => Post "/country" impl CountryManagement);
pub async fn create_country<TCountryManagement: CountryManagement>(
    api: web::Data<CountryApi<TCountryManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let country: NewCountry = parse_body(&body, "Invalid request body")?;
    let country = api.create(&country).await.map_err(|e| {
        warn!("Could not create country. {e}");
        ServerError::BackendError("Error creating country".to_string())
    })?;
    Ok(HttpResponse::Created().json(JsonResponse::created("Country created successfully", country)))
}

route!(get_country => Get "/country/{code}" impl CountryManagement);
pub async fn get_country<TCountryManagement: CountryManagement>(
    path: web::Path<i64>,
    api: web::Data<CountryApi<TCountryManagement>>,
) -> Result<HttpResponse, ServerError> {
    let code = path.into_inner();
    let country = api
        .get(code)
        .await
        .map_err(|e| ServerError::BackendError(e.to_string()))?
        .ok_or_else(|| ServerError::NoRecordFound("Country not found".to_string()))?;
    Ok(HttpResponse::Ok().json(JsonResponse::ok("Country retrieved successfully", country)))
}

route!(update_country => Put "/country/{code}" impl CountryManagement);
pub async fn update_country<TCountryManagement: CountryManagement>(
    path: web::Path<i64>,
    api: web::Data<CountryApi<TCountryManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let code = path.into_inner();
    let country: NewCountry = parse_body(&body, "Failed to read body")?;
    let affected = api.update(code, &country).await.map_err(|e| {
        warn!("Could not update country {code}. {e}");
        ServerError::BackendError("Error updating country".to_string())
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("Country not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Country updated successfully")))
}

route!(delete_country => Delete "/country/{code}" impl CountryManagement);
pub async fn delete_country<TCountryManagement: CountryManagement>(
    path: web::Path<i64>,
    api: web::Data<CountryApi<TCountryManagement>>,
) -> Result<HttpResponse, ServerError> {
    let code = path.into_inner();
    let affected = api.delete(code).await.map_err(|e| {
        warn!("Could not delete country {code}. {e}");
        ServerError::QueryExecError
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("Country not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Country deleted successfully")))
}

//----------------------------------------------   Roles  ----------------------------------------------------

route!(list_roles => Get "/role" impl RoleManagement);
pub async fn list_roles<TRoleManagement: RoleManagement>(
    query: web::Query<PageQuery>,
    api: web::Data<RoleApi<TRoleManagement>>,
) -> Result<HttpResponse, ServerError> {
    let result = api.list(query.page_params()).await.map_err(map_list_error)?;
    if result.rows.is_empty() {
        return Err(ServerError::NoRecordFound("Data not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(PaginatedResponse::data_found(result)))
}

route!(create_role => Post "/role" impl RoleManagement);
pub async fn create_role<TRoleManagement: RoleManagement>(
    api: web::Data<RoleApi<TRoleManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let role: RolePayload = parse_body(&body, "Invalid request body")?;
    let role = api.create(&role.name).await.map_err(|e| {
        warn!("Could not create role. {e}");
        ServerError::BackendError("Error creating role".to_string())
    })?;
    Ok(HttpResponse::Created().json(JsonResponse::created("Role created successfully", role)))
}

route!(get_role => Get "/role/{id}" impl RoleManagement);
pub async fn get_role<TRoleManagement: RoleManagement>(
    path: web::Path<i64>,
    api: web::Data<RoleApi<TRoleManagement>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let role = api
        .get(id)
        .await
        .map_err(|e| ServerError::BackendError(e.to_string()))?
        .ok_or_else(|| ServerError::NoRecordFound("Role not found".to_string()))?;
    Ok(HttpResponse::Ok().json(JsonResponse::ok("Role retrieved successfully", role)))
}

route!(update_role => Put "/role/{id}" impl RoleManagement);
pub async fn update_role<TRoleManagement: RoleManagement>(
    path: web::Path<i64>,
    api: web::Data<RoleApi<TRoleManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let role: RolePayload = parse_body(&body, "Failed to read body")?;
    let affected = api.update(id, &role.name).await.map_err(|e| {
        warn!("Could not update role {id}. {e}");
        ServerError::BackendError("Error updating role".to_string())
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("Role not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Role updated successfully")))
}

route!(delete_role => Delete "/role/{id}" impl RoleManagement);
pub async fn delete_role<TRoleManagement: RoleManagement>(
    path: web::Path<i64>,
    api: web::Data<RoleApi<TRoleManagement>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let affected = api.delete(id).await.map_err(|e| {
        warn!("Could not delete role {id}. {e}");
        ServerError::QueryExecError
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("Role not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Role deleted successfully")))
}

//----------------------------------------------   Products  ----------------------------------------------------

route!(list_products => Get "/product" impl ProductManagement);
pub async fn list_products<TProductManagement: ProductManagement>(
    query: web::Query<PageQuery>,
    api: web::Data<ProductApi<TProductManagement>>,
) -> Result<HttpResponse, ServerError> {
    let result = api.list(query.page_params()).await.map_err(map_list_error)?;
    if result.rows.is_empty() {
        return Err(ServerError::NoRecordFound("Data not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(PaginatedResponse::data_found(result)))
}

route!(create_product => Post "/product" impl ProductManagement);
pub async fn create_product<TProductManagement: ProductManagement>(
    api: web::Data<ProductApi<TProductManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let product: NewProduct = parse_body(&body, "Invalid request body")?;
    let product = api.create(&product).await.map_err(|e| {
        warn!("Could not create product. {e}");
        ServerError::BackendError("Error creating product".to_string())
    })?;
    Ok(HttpResponse::Created().json(JsonResponse::created("Product created successfully", product)))
}

route!(get_product => Get "/product/{id}" impl ProductManagement);
pub async fn get_product<TProductManagement: ProductManagement>(
    path: web::Path<i64>,
    api: web::Data<ProductApi<TProductManagement>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let product = api
        .get(id)
        .await
        .map_err(|e| ServerError::BackendError(e.to_string()))?
        .ok_or_else(|| ServerError::NoRecordFound("Product not found".to_string()))?;
    Ok(HttpResponse::Ok().json(JsonResponse::ok("Product retrieved successfully", product)))
}

route!(update_product => Put "/product/{id}" impl ProductManagement);
pub async fn update_product<TProductManagement: ProductManagement>(
    path: web::Path<i64>,
    api: web::Data<ProductApi<TProductManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let product: NewProduct = parse_body(&body, "Failed to read body")?;
    let affected = api.update(id, &product).await.map_err(|e| {
        warn!("Could not update product {id}. {e}");
        ServerError::BackendError("Error updating product".to_string())
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("Product not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Product updated successfully")))
}

route!(delete_product => Delete "/product/{id}" impl ProductManagement);
pub async fn delete_product<TProductManagement: ProductManagement>(
    path: web::Path<i64>,
    api: web::Data<ProductApi<TProductManagement>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let affected = api.delete(id).await.map_err(|e| {
        warn!("Could not delete product {id}. {e}");
        ServerError::QueryExecError
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("Product not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Product deleted successfully")))
}

//----------------------------------------------   Users  ----------------------------------------------------

route!(list_users => Get "/user" impl UserManagement);
pub async fn list_users<TUserManagement: UserManagement>(
    query: web::Query<PageQuery>,
    api: web::Data<UserApi<TUserManagement>>,
) -> Result<HttpResponse, ServerError> {
    let result = api.list(query.page_params()).await.map_err(map_list_error)?;
    if result.rows.is_empty() {
        return Err(ServerError::NoRecordFound("Data not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(PaginatedResponse::data_found(result)))
}

route!(create_user => Post "/user" impl UserManagement);
pub async fn create_user<TUserManagement: UserManagement>(
    api: web::Data<UserApi<TUserManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let user: NewUser = parse_body(&body, "Invalid request body")?;
    let user = api.create(&user).await.map_err(|e| {
        warn!("Could not create user. {e}");
        ServerError::BackendError("Error creating user".to_string())
    })?;
    Ok(HttpResponse::Created().json(JsonResponse::created("User created successfully", user)))
}

route!(get_user => Get "/user/{id}" impl UserManagement);
pub async fn get_user<TUserManagement: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<TUserManagement>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let user = api
        .get(id)
        .await
        .map_err(|e| ServerError::BackendError(e.to_string()))?
        .ok_or_else(|| ServerError::NoRecordFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(JsonResponse::ok("User retrieved successfully", user)))
}

route!(update_user => Put "/user/{id}" impl UserManagement);
pub async fn update_user<TUserManagement: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<TUserManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let user: NewUser = parse_body(&body, "Failed to read body")?;
    let affected = api.update(id, &user).await.map_err(|e| {
        warn!("Could not update user {id}. {e}");
        ServerError::BackendError("Error updating user".to_string())
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("User not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("User updated successfully")))
}

route!(delete_user => Delete "/user/{id}" impl UserManagement);
pub async fn delete_user<TUserManagement: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<TUserManagement>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let affected = api.delete(id).await.map_err(|e| {
        warn!("Could not delete user {id}. {e}");
        ServerError::QueryExecError
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("User not found".to_string()));
    }
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("User deleted successfully")))
}

route!(bulk_delete_users => Post "/user/bulk-delete" impl UserManagement);
/// Deletes every user named in the request body in one statement.
///
/// An empty id list is rejected before the database is touched. The claims argument is only used
/// for the audit trail; who bulk-deleted what is worth a log line.
pub async fn bulk_delete_users<TUserManagement: UserManagement>(
    claims: JwtClaims,
    api: web::Data<UserApi<TUserManagement>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    let request: BulkDeleteRequest = parse_body(&body, "Failed to read request body")?;
    if request.user_ids.is_empty() {
        return Err(ServerError::InvalidRequestBody("No user IDs provided for deletion".to_string()));
    }
    let affected = api.delete_many(&request.user_ids).await.map_err(|e| {
        warn!("Bulk user delete failed. {e}");
        ServerError::QueryExecError
    })?;
    if affected == 0 {
        return Err(ServerError::NoRecordFound("No users found for deletion".to_string()));
    }
    info!("🗃️ {} deleted {affected} users in bulk", claims.email);
    Ok(HttpResponse::Accepted().json(JsonResponse::accepted("Users deleted successfully")))
}
