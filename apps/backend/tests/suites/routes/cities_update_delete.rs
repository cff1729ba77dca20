use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{expect_failure, expect_success};
use serde_json::json;

use crate::support::app_builder::{create_test_app, test_state};
use crate::support::factory::create_named;

#[actix_web::test]
async fn rating_only_update_leaves_other_fields() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let created = create_named(&app, "Updatable").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/cities/{id}"))
        .set_json(json!({"touristRating": 2}))
        .to_request();
    let updated = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(updated["touristRating"], 2);
    for field in [
        "id",
        "name",
        "state",
        "country",
        "dateEstablished",
        "estimatedPopulation",
        "createdAt",
    ] {
        assert_eq!(updated[field], created[field], "{field} changed");
    }
    assert!(updated["updatedAt"].as_str().unwrap() >= created["updatedAt"].as_str().unwrap());
}

#[actix_web::test]
async fn update_ignores_immutable_fields() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let created = create_named(&app, "Fixed Name").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/cities/{id}"))
        .set_json(json!({"name": "Renamed", "country": "Elsewhere", "estimatedPopulation": 7}))
        .to_request();
    let updated = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["country"], created["country"]);
    assert_eq!(updated["estimatedPopulation"], 7);
}

#[actix_web::test]
async fn empty_body_update_is_accepted() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let created = create_named(&app, "Touch").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/cities/{id}"))
        .to_request();
    let updated = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(updated["touristRating"], created["touristRating"]);
}

#[actix_web::test]
async fn invalid_update_is_400_and_changes_nothing() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let created = create_named(&app, "Guarded").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/cities/{id}"))
        .set_json(json!({"touristRating": 9}))
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "touristRating",
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/cities/{id}"))
        .to_request();
    let current = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(current["touristRating"], created["touristRating"]);
}

#[actix_web::test]
async fn update_unknown_id_is_404() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let req = test::TestRequest::put()
        .uri("/api/cities/01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .set_json(json!({"touristRating": 3}))
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "City not found",
    )
    .await;
}

#[actix_web::test]
async fn delete_returns_id_then_404() {
    let app = create_test_app(test_state().await).build().await.unwrap();
    let created = create_named(&app, "Doomed").await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cities/{id}"))
        .to_request();
    let data = expect_success(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(data, json!({"id": id}));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cities/{id}"))
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "City not found",
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/cities/{id}"))
        .to_request();
    expect_failure(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "City not found",
    )
    .await;
}
