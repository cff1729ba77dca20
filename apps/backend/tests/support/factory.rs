use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::expect_success;
use backend_test_support::unique_helpers::unique_city_name;
use cities_backend::domain::{CityDraft, NewCity};
use serde_json::{json, Value};

pub fn city_body(name: &str) -> Value {
    json!({
        "name": name,
        "state": "Test State",
        "country": "Test Country",
        "touristRating": 4,
        "dateEstablished": "2020-01-01T00:00:00.000Z",
        "estimatedPopulation": 100000
    })
}

pub fn new_city(name: &str) -> NewCity {
    CityDraft {
        name: Some(name.to_string()),
        state: Some("Test State".into()),
        country: Some("Test Country".into()),
        tourist_rating: Some(3),
        date_established: Some("1900-05-01T00:00:00.000Z".into()),
        estimated_population: Some(50_000),
    }
    .validate()
    .expect("factory city should be valid")
}

/// POST a city through the API and return the created representation.
pub async fn create_via_api<S, B>(app: &S, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    expect_success(resp, StatusCode::CREATED).await
}

pub async fn create_named<S, B>(app: &S, prefix: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    create_via_api(app, city_body(&unique_city_name(prefix))).await
}
