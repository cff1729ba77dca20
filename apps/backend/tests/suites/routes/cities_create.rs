use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{expect_failure, expect_success};
use serde_json::json;

use crate::support::app_builder::{create_test_app, test_state};
use crate::support::factory::city_body;

#[actix_web::test]
async fn create_returns_201_with_server_fields() {
    let app = create_test_app(test_state().await).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(city_body("Test City"))
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::CREATED).await;

    assert_eq!(data["name"], "Test City");
    assert_eq!(data["state"], "Test State");
    assert_eq!(data["country"], "Test Country");
    assert_eq!(data["touristRating"], 4);
    assert_eq!(data["estimatedPopulation"], 100000);
    assert_eq!(data["dateEstablished"], "2020-01-01T00:00:00.000Z");
    assert_eq!(data["id"].as_str().unwrap().len(), 26);
    assert!(data["createdAt"].as_str().unwrap().ends_with('Z'));
    assert_eq!(data["createdAt"], data["updatedAt"]);
}

#[actix_web::test]
async fn create_ids_are_unique() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut ids = Vec::new();
    for i in 0..5 {
        let req = test::TestRequest::post()
            .uri("/api/cities")
            .set_json(city_body(&format!("City {i}")))
            .to_request();
        let data = expect_success(test::call_service(&app, req).await, StatusCode::CREATED).await;
        ids.push(data["id"].as_str().unwrap().to_string());
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[actix_web::test]
async fn create_accepts_dates_before_year_one() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut body = city_body("Rome");
    body["dateEstablished"] = json!("-0753-04-21T00:00:00.000Z");

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(data["dateEstablished"], "-0753-04-21T00:00:00.000Z");
}

#[actix_web::test]
async fn create_normalizes_offsets_to_utc() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut body = city_body("Offset Town");
    body["dateEstablished"] = json!("2020-01-01T05:30:00+05:30");

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(data["dateEstablished"], "2020-01-01T00:00:00.000Z");
}

#[actix_web::test]
async fn create_rejects_missing_name() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut body = city_body("ignored");
    body.as_object_mut().unwrap().remove("name");

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "City name is required",
    )
    .await;
}

#[actix_web::test]
async fn create_rejects_out_of_range_rating() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    for rating in [0, 6] {
        let mut body = city_body("Bad Rating");
        body["touristRating"] = json!(rating);
        let req = test::TestRequest::post()
            .uri("/api/cities")
            .set_json(body)
            .to_request();
        expect_failure(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            "touristRating must be between 1 and 5",
        )
        .await;
    }
}

#[actix_web::test]
async fn create_rejects_non_positive_population_and_bad_date() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut body = city_body("Ghost Town");
    body["estimatedPopulation"] = json!(0);
    body["dateEstablished"] = json!("not a date");

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    let env = expect_failure(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "estimatedPopulation",
    )
    .await;
    assert!(env.error.unwrap().contains("dateEstablished"));
}

#[actix_web::test]
async fn create_rejects_malformed_json() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::post()
        .uri("/api/cities")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "Invalid JSON",
    )
    .await;
}

#[actix_web::test]
async fn create_rejects_wrong_field_types() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut body = city_body("Typed");
    body["touristRating"] = json!("five");
    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "wrong types",
    )
    .await;
}

#[actix_web::test]
async fn oversized_body_is_rejected() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut body = city_body("Big Body");
    body["padding"] = json!("x".repeat(200 * 1024));

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "Request body too large",
    )
    .await;
}
