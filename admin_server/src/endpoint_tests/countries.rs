//! Endpoint tests for the country CRUD routes. The other resources share the same handler shape,
//! so the status-code matrix is only exercised once, here.

use actix_web::{body::MessageBody, dev::HttpServiceFactory, http::StatusCode, test, test::TestRequest, web, App};
use admin_engine::{
    db_types::{Country, NewCountry},
    traits::AdminApiError,
    CountryApi,
};

use super::mocks::MockCountryManager;
use crate::routes::{
    CreateCountryRoute,
    DeleteCountryRoute,
    GetCountryRoute,
    ListCountriesRoute,
    UpdateCountryRoute,
};

fn country(code: i64) -> Country {
    Country { code, name: format!("Country {code}"), continent_name: "Atlantis".into() }
}

fn db_err() -> AdminApiError {
    AdminApiError::DatabaseError("boom".into())
}

async fn call(manager: MockCountryManager, route: impl HttpServiceFactory + 'static, req: TestRequest) -> (StatusCode, String) {
    let _ = env_logger::try_init().ok();
    let api = CountryApi::new(manager);
    let app = test::init_service(App::new().app_data(web::Data::new(api)).service(route)).await;
    let (_req, res) = test::call_service(&app, req.to_request()).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

//------------------------------------   Listing   -------------------------------------------------------------------

#[actix_web::test]
async fn listing_returns_the_paging_envelope() {
    let mut manager = MockCountryManager::new();
    manager.expect_count_countries().returning(|| Ok(25));
    manager
        .expect_fetch_countries()
        .withf(|limit, offset| (*limit, *offset) == (10, 20))
        .returning(|limit, offset| Ok((0..5.min(limit)).map(|i| country(offset + i + 1)).collect()));
    let req = TestRequest::get().uri("/country?page=3&pageSize=10");
    let (status, body) = call(manager, ListCountriesRoute::<MockCountryManager>::new(), req).await;
    assert!(status.is_success());
    let response: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["message"], "Data found");
    assert_eq!(response["page"], 3);
    assert_eq!(response["per_page"], 10);
    assert_eq!(response["total"], 25);
    assert_eq!(response["total_pages"], 3);
    assert_eq!(response["data"].as_array().unwrap().len(), 5);
    assert_eq!(response["data"][0]["name"], "Country 21");
}

#[actix_web::test]
async fn listing_normalizes_nonsense_paging_params() {
    let mut manager = MockCountryManager::new();
    manager.expect_count_countries().returning(|| Ok(1));
    // page=0 and a negative pageSize fall back to page 1 of 10
    manager
        .expect_fetch_countries()
        .withf(|limit, offset| (*limit, *offset) == (10, 0))
        .returning(|_, _| Ok(vec![country(1)]));
    let req = TestRequest::get().uri("/country?page=0&pageSize=-5");
    let (status, _) = call(manager, ListCountriesRoute::<MockCountryManager>::new(), req).await;
    assert!(status.is_success());
}

#[actix_web::test]
async fn an_empty_page_is_not_found() {
    let mut manager = MockCountryManager::new();
    manager.expect_count_countries().returning(|| Ok(3));
    manager.expect_fetch_countries().returning(|_, _| Ok(vec![]));
    let req = TestRequest::get().uri("/country?page=9");
    let (status, body) = call(manager, ListCountriesRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Data not found"), "was: {body}");
}

#[actix_web::test]
async fn extreme_paging_values_reach_the_backend_unharmed() {
    let mut manager = MockCountryManager::new();
    manager.expect_count_countries().returning(|| Ok(3));
    // The saturated offset must still be non-negative when it hits the backend
    manager.expect_fetch_countries().withf(|_, offset| *offset >= 0).returning(|_, _| Ok(vec![]));
    let req = TestRequest::get().uri("/country?page=9223372036854775807&pageSize=9223372036854775807");
    let (status, body) = call(manager, ListCountriesRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Data not found"), "was: {body}");
}

#[actix_web::test]
async fn count_failures_are_reported_distinctly() {
    let mut manager = MockCountryManager::new();
    manager.expect_count_countries().returning(|| Err(db_err()));
    let req = TestRequest::get().uri("/country");
    let (status, body) = call(manager, ListCountriesRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Error getting total count"), "was: {body}");
}

#[actix_web::test]
async fn page_fetch_failures_are_reported_distinctly() {
    let mut manager = MockCountryManager::new();
    manager.expect_count_countries().returning(|| Ok(10));
    manager.expect_fetch_countries().returning(|_, _| Err(db_err()));
    let req = TestRequest::get().uri("/country");
    let (status, body) = call(manager, ListCountriesRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Error executing the query"), "was: {body}");
}

//------------------------------------   Create / Get   --------------------------------------------------------------

#[actix_web::test]
async fn creating_a_country_returns_the_stored_row() {
    let mut manager = MockCountryManager::new();
    manager
        .expect_create_country()
        .withf(|c: &NewCountry| c.name == "Wakanda")
        .returning(|c| Ok(Country { code: 42, name: c.name.clone(), continent_name: c.continent_name.clone() }));
    let req = TestRequest::post()
        .uri("/country")
        .set_payload(r#"{"name": "Wakanda", "continent_name": "Africa"}"#);
    let (status, body) = call(manager, CreateCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.contains("Country created successfully"), "was: {body}");
    assert!(body.contains(r#""code":42"#), "was: {body}");
}

#[actix_web::test]
async fn creating_with_a_malformed_body_is_a_bad_request() {
    let manager = MockCountryManager::new();
    let req = TestRequest::post().uri("/country").set_payload("not json");
    let (status, body) = call(manager, CreateCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid request body"), "was: {body}");
}

#[actix_web::test]
async fn fetching_an_unknown_country_is_not_found() {
    let mut manager = MockCountryManager::new();
    manager.expect_fetch_country().returning(|_| Ok(None));
    let req = TestRequest::get().uri("/country/999");
    let (status, body) = call(manager, GetCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Country not found"), "was: {body}");
}

#[actix_web::test]
async fn fetching_a_country_by_code() {
    let mut manager = MockCountryManager::new();
    manager.expect_fetch_country().withf(|code| *code == 66).returning(|code| Ok(Some(country(code))));
    let req = TestRequest::get().uri("/country/66");
    let (status, body) = call(manager, GetCountryRoute::<MockCountryManager>::new(), req).await;
    assert!(status.is_success());
    assert!(body.contains("Country retrieved successfully"), "was: {body}");
}

//------------------------------------   Update / Delete   -----------------------------------------------------------

#[actix_web::test]
async fn updating_a_country_is_accepted() {
    let mut manager = MockCountryManager::new();
    manager.expect_update_country().returning(|_, _| Ok(1));
    let req = TestRequest::put()
        .uri("/country/66")
        .set_payload(r#"{"name": "Siam", "continent_name": "Asia"}"#);
    let (status, body) = call(manager, UpdateCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.contains("Country updated successfully"), "was: {body}");
}

#[actix_web::test]
async fn updating_an_unknown_country_is_not_found() {
    let mut manager = MockCountryManager::new();
    manager.expect_update_country().returning(|_, _| Ok(0));
    let req = TestRequest::put()
        .uri("/country/999")
        .set_payload(r#"{"name": "Nowhere", "continent_name": "Nowhere"}"#);
    let (status, body) = call(manager, UpdateCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Country not found"), "was: {body}");
}

#[actix_web::test]
async fn deleting_a_country_is_accepted() {
    let mut manager = MockCountryManager::new();
    manager.expect_delete_country().withf(|code| *code == 66).returning(|_| Ok(1));
    let req = TestRequest::delete().uri("/country/66");
    let (status, body) = call(manager, DeleteCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.contains("Country deleted successfully"), "was: {body}");
}

#[actix_web::test]
async fn deleting_an_unknown_country_is_not_found() {
    let mut manager = MockCountryManager::new();
    manager.expect_delete_country().returning(|_| Ok(0));
    let req = TestRequest::delete().uri("/country/999");
    let (status, body) = call(manager, DeleteCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Country not found"), "was: {body}");
}

#[actix_web::test]
async fn delete_query_failures_are_bad_gateway() {
    let mut manager = MockCountryManager::new();
    manager.expect_delete_country().returning(|_| Err(db_err()));
    let req = TestRequest::delete().uri("/country/66");
    let (status, body) = call(manager, DeleteCountryRoute::<MockCountryManager>::new(), req).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Unable to execute the query"), "was: {body}");
}
