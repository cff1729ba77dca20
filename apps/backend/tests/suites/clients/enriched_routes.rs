use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::expect_success;
use cities_backend::config::enrichment::EnrichmentConfig;
use cities_backend::{build_state, DbProfile};
use serde_json::json;

use super::fake_upstream::{self, API_KEY};
use crate::support::app_builder::create_test_app;
use crate::support::factory::create_via_api;

fn body(name: &str, country: &str) -> serde_json::Value {
    json!({
        "name": name,
        "state": "Somewhere",
        "country": country,
        "touristRating": 5,
        "dateEstablished": "1200-01-01T00:00:00.000Z",
        "estimatedPopulation": 2_000_000
    })
}

#[actix_web::test]
async fn detail_and_search_are_enriched_from_upstreams() {
    let upstream = fake_upstream::start().await;
    let config = EnrichmentConfig {
        country_base_url: upstream.country_base(),
        weather_base_url: upstream.weather_base(),
        weather_api_key: Some(API_KEY.to_string()),
    };
    let state = build_state()
        .with_db(DbProfile::Test)
        .with_enrichment_config(&config, reqwest::Client::new())
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).build().await.unwrap();

    let paris = create_via_api(&app, body("Paris", "France")).await;
    create_via_api(&app, body("Gotham", "Atlantis")).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/cities/{}", paris["id"].as_str().unwrap()))
        .to_request();
    let detail = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(detail["countryCode2"], "FR");
    assert_eq!(detail["countryCode3"], "FRA");
    assert_eq!(detail["currencyCode"], "EUR");
    assert_eq!(detail["weather"]["description"], "light rain");
    assert_eq!(detail["weather"]["windSpeed"], 4.2);

    // Unknown country and city degrade to placeholders without failing.
    let req = test::TestRequest::get()
        .uri("/api/cities/search?name=gotham")
        .to_request();
    let found = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["countryCode2"], "");
    assert_eq!(found[0]["currencyCode"], "");
    assert_eq!(found[0]["weather"]["description"], "Data unavailable");
    assert_eq!(found[0]["weather"]["temperature"], 0.0);

    upstream.stop().await;
}
