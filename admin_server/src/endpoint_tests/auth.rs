use actix_web::{
    body::MessageBody,
    http::StatusCode,
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use adm_common::hashing::sha256_hex;
use admin_engine::{db_types::AdminUser, AuthApi, CountryApi};
use jwt_compact::alg::Hs256Key;
use log::*;

use super::mocks::*;
use crate::{
    auth::{validate_access_token, TokenIssuer, ACCESS_TOKEN_HEADER},
    config::AuthConfig,
    middleware::AclMiddlewareFactory,
    routes::{AdminLoginRoute, ListCountriesRoute},
};

fn alice() -> AdminUser {
    AdminUser {
        id: 7,
        username: "alice".into(),
        role: Some("admin".into()),
        email: "alice@example.com".into(),
        password: sha256_hex("hunter2"),
    }
}

fn configure_login(config: AuthConfig, user: Option<AdminUser>) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let mut auth_manager = MockAuthManager::new();
        auth_manager.expect_fetch_admin_user().returning(move |_| Ok(user.clone()));
        let auth_api = AuthApi::new(auth_manager);
        let jwt_signer = TokenIssuer::new(&config);
        cfg.app_data(web::Data::new(auth_api))
            .app_data(web::Data::new(jwt_signer))
            .service(AdminLoginRoute::<MockAuthManager>::new());
    }
}

async fn post_login(body: &str, user: Option<AdminUser>) -> (StatusCode, String, AuthConfig) {
    let _ = env_logger::try_init().ok();
    let config = AuthConfig::default();
    let app = App::new().configure(configure_login(config.clone(), user));
    let app = test::init_service(app).await;
    let req = TestRequest::post().uri("/api/v1/login").set_payload(body.to_string()).to_request();
    let (_req, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    debug!("Response body: {body}");
    (status, body, config)
}

#[actix_web::test]
async fn login_with_valid_credentials() {
    let body = r#"{"email": "alice@example.com", "password": "hunter2"}"#;
    let (status, body, config) = post_login(body, Some(alice())).await;
    assert!(status.is_success());
    assert!(body.contains("Authenticated successfully"), "was: {body}");
    assert!(body.contains(r#""userEmail":"alice@example.com""#), "was: {body}");
    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    let token = response["data"]["token"].as_str().unwrap();
    let key = Hs256Key::new(config.jwt_secret.reveal().as_bytes());
    let claims = validate_access_token(token, &key).unwrap();
    assert_eq!(claims.user_id, 7);
    assert_eq!(claims.email, "alice@example.com");
    assert!(claims.is_admin());
}

#[actix_web::test]
async fn login_with_wrong_password() {
    let body = r#"{"email": "alice@example.com", "password": "hunter3"}"#;
    let (status, body, _) = post_login(body, Some(alice())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Invalid email or password"), "was: {body}");
}

#[actix_web::test]
async fn login_with_unknown_email() {
    let body = r#"{"email": "mallory@example.com", "password": "hunter2"}"#;
    let (status, body, _) = post_login(body, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Invalid email or password"), "was: {body}");
}

#[actix_web::test]
async fn login_with_malformed_body() {
    let (status, body, _) = post_login("{oops", Some(alice())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid request body"), "was: {body}");
}

//------------------------------------   Access control   ------------------------------------------------------------

fn configure_protected(config: AuthConfig) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let mut country_manager = MockCountryManager::new();
        country_manager.expect_count_countries().returning(|| Ok(1));
        country_manager.expect_fetch_countries().returning(|_, _| {
            Ok(vec![admin_engine::db_types::Country {
                code: 66,
                name: "Thailand".into(),
                continent_name: "Asia".into(),
            }])
        });
        let countries_api = CountryApi::new(country_manager);
        cfg.app_data(web::Data::new(countries_api)).service(
            web::scope("/api/v1")
                .wrap(AclMiddlewareFactory::new(&config))
                .service(ListCountriesRoute::<MockCountryManager>::new()),
        );
    }
}

async fn get_countries_with_token(token: Option<&str>, config: AuthConfig) -> (StatusCode, String) {
    let _ = env_logger::try_init().ok();
    let app = App::new().configure(configure_protected(config));
    let app = test::init_service(app).await;
    let mut req = TestRequest::get().uri("/api/v1/country");
    if let Some(token) = token {
        req = req.insert_header((ACCESS_TOKEN_HEADER, token));
    }
    let res = match test::try_call_service(&app, req.to_request()).await {
        Ok(res) => res.into_parts().1.map_into_boxed_body(),
        Err(err) => actix_web::HttpResponse::from_error(err),
    };
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

#[actix_web::test]
async fn protected_route_without_token() {
    let (status, body) = get_countries_with_token(None, AuthConfig::default()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Error Token is Empty"), "was: {body}");
}

#[actix_web::test]
async fn protected_route_with_blank_token() {
    let (status, body) = get_countries_with_token(Some("   "), AuthConfig::default()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Error Token is Empty"), "was: {body}");
}

#[actix_web::test]
async fn protected_route_with_garbage_token() {
    let (status, body) = get_countries_with_token(Some("made up nonsense"), AuthConfig::default()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Error Invalid Token"), "was: {body}");
}

#[actix_web::test]
async fn protected_route_with_foreign_token() {
    // Signed with a different key than the one the server verifies with
    let other = AuthConfig::default();
    let (token, _) = TokenIssuer::new(&other).issue_token(1, "a@b.c", Some("admin".into())).unwrap();
    let (status, body) = get_countries_with_token(Some(&token), AuthConfig::default()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Error Invalid Token"), "was: {body}");
}

#[actix_web::test]
async fn protected_route_with_non_admin_token() {
    let config = AuthConfig::default();
    let (token, _) = TokenIssuer::new(&config).issue_token(2, "bob@example.com", Some("editor".into())).unwrap();
    let (status, body) = get_countries_with_token(Some(&token), config).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("Error: You are Unauthorized"), "was: {body}");
}

#[actix_web::test]
async fn protected_route_with_roleless_token() {
    let config = AuthConfig::default();
    let (token, _) = TokenIssuer::new(&config).issue_token(3, "carol@example.com", None).unwrap();
    let (status, body) = get_countries_with_token(Some(&token), config).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("Error: You are Unauthorized"), "was: {body}");
}

#[actix_web::test]
async fn protected_route_with_admin_token() {
    let config = AuthConfig::default();
    let (token, _) = TokenIssuer::new(&config).issue_token(7, "alice@example.com", Some("admin".into())).unwrap();
    let (status, body) = get_countries_with_token(Some(&token), config).await;
    assert!(status.is_success(), "was: {status} {body}");
    assert!(body.contains("Thailand"), "was: {body}");
}
