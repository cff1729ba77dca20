use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{expect_failure, read_envelope};
use cities_backend::AppState;

use crate::support::app_builder::{create_test_app, test_state};

#[actix_web::test]
async fn unknown_route_is_enveloped_404() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::get().uri("/api/towns").to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "Route not found",
    )
    .await;
}

#[actix_web::test]
async fn missing_database_is_generic_500() {
    let app = create_test_app(AppState::new_without_db())
        .build()
        .await
        .unwrap();
    let req = test::TestRequest::get().uri("/api/cities").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-trace-id"));

    let env = read_envelope(resp, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert!(!env.success);
    assert_eq!(env.error.as_deref(), Some("Internal server error"));
}

#[actix_web::test]
async fn trace_id_header_matches_request_id() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::get()
        .uri("/api/cities/01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    let trace_id = resp.headers().get("x-trace-id").unwrap().to_str().unwrap();
    assert_eq!(request_id, trace_id);
}

#[actix_web::test]
async fn success_responses_have_request_id_but_no_trace_id() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::get().uri("/api/cities").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let request_id = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(request_id.len(), 36);
    assert!(resp.headers().get("x-trace-id").is_none());
}
