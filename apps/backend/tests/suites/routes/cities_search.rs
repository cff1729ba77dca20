use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{expect_failure, expect_success};
use backend_test_support::unique_helpers::unique_city_name;

use crate::support::app_builder::{create_test_app, test_state, test_state_with};
use crate::support::factory::{city_body, create_via_api};
use crate::support::fakes::fixed_enricher;

#[actix_web::test]
async fn search_matches_substring_in_id_order() {
    let (enricher, _) = fixed_enricher();
    let app = create_test_app(test_state_with(enricher).await)
        .build()
        .await
        .unwrap();
    let a = create_via_api(&app, city_body("Springfield North")).await;
    create_via_api(&app, city_body("Shelbyville")).await;
    let b = create_via_api(&app, city_body("West Springfield")).await;

    let req = test::TestRequest::get()
        .uri("/api/cities/search?name=Springfield")
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    let items = data.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], a["id"]);
    assert_eq!(items[1]["id"], b["id"]);
    assert_eq!(items[0]["countryCode2"], "FR");
    assert_eq!(items[1]["weather"]["description"], "light rain");
}

#[actix_web::test]
async fn search_is_case_insensitive_for_ascii() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let name = unique_city_name("Lisbon");
    create_via_api(&app, city_body(&name)).await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/cities/search?name={}",
            name.to_uppercase().replace(' ', "%20")
        ))
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn wildcards_match_literally() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    create_via_api(&app, city_body("Plainville")).await;

    let req = test::TestRequest::get()
        .uri("/api/cities/search?name=%25")
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn no_match_is_empty_success() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::get()
        .uri("/api/cities/search?name=Atlantis")
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data, serde_json::json!([]));
}

#[actix_web::test]
async fn missing_or_empty_name_is_400() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    for uri in ["/api/cities/search", "/api/cities/search?name="] {
        let req = test::TestRequest::get().uri(uri).to_request();
        expect_failure(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            "City name is required",
        )
        .await;
    }
}
