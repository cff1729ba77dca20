use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{expect_failure, expect_success};

use crate::support::app_builder::{create_test_app, test_state};
use crate::support::factory::create_named;

#[actix_web::test]
async fn empty_table_lists_nothing() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::get().uri("/api/cities").to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(data["items"].as_array().unwrap().len(), 0);
    assert!(data["nextCursor"].is_null());
    assert_eq!(data["hasMore"], false);
    assert_eq!(data["count"], 0);
}

#[actix_web::test]
async fn default_limit_is_ten() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    for _ in 0..12 {
        create_named(&app, "Paged").await;
    }

    let req = test::TestRequest::get().uri("/api/cities").to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data["count"], 10);
    assert_eq!(data["hasMore"], true);
    assert_eq!(data["nextCursor"], data["items"][9]["id"]);
}

#[actix_web::test]
async fn cursor_walks_all_rows_in_creation_order() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let mut created = Vec::new();
    for _ in 0..7 {
        let c = create_named(&app, "Walk").await;
        created.push(c["id"].as_str().unwrap().to_string());
    }

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let uri = match &cursor {
            Some(c) => format!("/api/cities?limit=3&cursor={c}"),
            None => "/api/cities?limit=3".to_string(),
        };
        let req = test::TestRequest::get().uri(&uri).to_request();
        let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
        for item in data["items"].as_array().unwrap() {
            seen.push(item["id"].as_str().unwrap().to_string());
        }
        if data["hasMore"] == false {
            assert!(data["nextCursor"].is_null());
            break;
        }
        cursor = data["nextCursor"].as_str().map(str::to_string);
    }

    assert_eq!(seen, created);
}

#[actix_web::test]
async fn empty_cursor_is_first_page() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let first = create_named(&app, "First").await;

    let req = test::TestRequest::get()
        .uri("/api/cities?cursor=&limit=1")
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data["items"][0]["id"], first["id"]);
}

#[actix_web::test]
async fn limit_bounds() {
    let app = create_test_app(test_state().await).build().await.unwrap();

    for bad in ["0", "101", "-1", "ten"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/cities?limit={bad}"))
            .to_request();
        expect_failure(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            "Limit must be between 1 and 100",
        )
        .await;
    }

    let req = test::TestRequest::get()
        .uri("/api/cities?limit=100")
        .to_request();
    expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
}

#[actix_web::test]
async fn list_is_not_enriched() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    create_named(&app, "Plain").await;

    let req = test::TestRequest::get().uri("/api/cities").to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert!(data["items"][0].get("weather").is_none());
}
