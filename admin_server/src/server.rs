use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use admin_engine::{run_migrations, AuthApi, CountryApi, ProductApi, RoleApi, SqliteDatabase, UserApi};
use log::info;

use crate::{
    auth::TokenIssuer,
    config::ServerConfig,
    errors::ServerError,
    middleware::AclMiddlewareFactory,
    routes::{
        health,
        AdminLoginRoute,
        BulkDeleteUsersRoute,
        CreateCountryRoute,
        CreateProductRoute,
        CreateRoleRoute,
        CreateUserRoute,
        DeleteCountryRoute,
        DeleteProductRoute,
        DeleteRoleRoute,
        DeleteUserRoute,
        GetCountryRoute,
        GetProductRoute,
        GetRoleRoute,
        GetUserRoute,
        ListCountriesRoute,
        ListProductsRoute,
        ListRolesRoute,
        ListUsersRoute,
        UpdateCountryRoute,
        UpdateProductRoute,
        UpdateRoleRoute,
        UpdateUserRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🗃️ Database connection established at {}", config.database_url);
    run_migrations(db.pool()).await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let auth_api = AuthApi::new(db.clone());
        let countries_api = CountryApi::new(db.clone());
        let roles_api = RoleApi::new(db.clone());
        let products_api = ProductApi::new(db.clone());
        let users_api = UserApi::new(db.clone());
        let jwt_signer = TokenIssuer::new(&config.auth);
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("adm::access_log"))
            .app_data(web::Data::new(auth_api))
            .app_data(web::Data::new(countries_api))
            .app_data(web::Data::new(roles_api))
            .app_data(web::Data::new(products_api))
            .app_data(web::Data::new(users_api))
            .app_data(web::Data::new(jwt_signer));
        // Every route in this scope requires a valid admin token
        let admin_scope = web::scope("/api/v1")
            .wrap(AclMiddlewareFactory::new(&config.auth))
            .service(ListCountriesRoute::<SqliteDatabase>::new())
            .service(CreateCountryRoute::<SqliteDatabase>::new())
            .service(GetCountryRoute::<SqliteDatabase>::new())
            .service(UpdateCountryRoute::<SqliteDatabase>::new())
            .service(DeleteCountryRoute::<SqliteDatabase>::new())
            .service(ListRolesRoute::<SqliteDatabase>::new())
            .service(CreateRoleRoute::<SqliteDatabase>::new())
            .service(GetRoleRoute::<SqliteDatabase>::new())
            .service(UpdateRoleRoute::<SqliteDatabase>::new())
            .service(DeleteRoleRoute::<SqliteDatabase>::new())
            .service(ListProductsRoute::<SqliteDatabase>::new())
            .service(CreateProductRoute::<SqliteDatabase>::new())
            .service(GetProductRoute::<SqliteDatabase>::new())
            .service(UpdateProductRoute::<SqliteDatabase>::new())
            .service(DeleteProductRoute::<SqliteDatabase>::new())
            .service(ListUsersRoute::<SqliteDatabase>::new())
            .service(CreateUserRoute::<SqliteDatabase>::new())
            .service(BulkDeleteUsersRoute::<SqliteDatabase>::new())
            .service(GetUserRoute::<SqliteDatabase>::new())
            .service(UpdateUserRoute::<SqliteDatabase>::new())
            .service(DeleteUserRoute::<SqliteDatabase>::new());
        app.service(health).service(AdminLoginRoute::<SqliteDatabase>::new()).service(admin_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host, port))?
    .run();
    Ok(srv)
}
