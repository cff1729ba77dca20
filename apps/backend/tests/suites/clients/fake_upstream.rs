//! A throwaway HTTP server standing in for the external APIs.

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

pub const API_KEY: &str = "test-key";

pub struct FakeUpstream {
    pub base: Url,
    handle: ServerHandle,
}

impl FakeUpstream {
    pub fn country_base(&self) -> Url {
        self.base.join("v3.1").unwrap()
    }

    pub fn weather_base(&self) -> Url {
        self.base.join("data/2.5").unwrap()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn country(name: web::Path<String>) -> HttpResponse {
    match name.as_str() {
        "France" => HttpResponse::Ok().json(json!([{
            "name": {"common": "France"},
            "cca2": "FR",
            "cca3": "FRA",
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
        }])),
        "United Kingdom" => HttpResponse::Ok().json(json!([{
            "cca2": "GB",
            "cca3": "GBR",
            "currencies": {"GBP": {"name": "British pound"}}
        }])),
        // Raw body so the currency keys reach the client in this exact order.
        "Zimbabwe" => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"[{"cca2":"ZW","cca3":"ZWE","currencies":{"ZWL":{},"BWP":{},"USD":{}}}]"#),
        "Antarctica" => HttpResponse::Ok().json(json!([{ "cca2": "AQ", "cca3": "ATA" }])),
        "Broken" => HttpResponse::InternalServerError().finish(),
        "Weird" => HttpResponse::Ok().json(json!({"unexpected": true})),
        _ => HttpResponse::NotFound().json(json!({"status": 404, "message": "Not Found"})),
    }
}

#[derive(Deserialize)]
struct WeatherQuery {
    q: String,
    appid: String,
    units: String,
}

async fn weather(query: web::Query<WeatherQuery>) -> HttpResponse {
    if query.appid != API_KEY {
        return HttpResponse::Unauthorized().json(json!({"cod": 401}));
    }
    if query.units != "metric" {
        return HttpResponse::BadRequest().finish();
    }
    match query.q.as_str() {
        "Paris" | "São Paulo" => HttpResponse::Ok().json(json!({
            "weather": [{"main": "Rain", "description": "light rain"}],
            "main": {"temp": 18.5, "humidity": 81},
            "wind": {"speed": 4.2}
        })),
        "Empty" => HttpResponse::Ok().json(json!({
            "weather": [],
            "main": {"temp": 1.0, "humidity": 2},
            "wind": {"speed": 3.0}
        })),
        _ => HttpResponse::NotFound().json(json!({"cod": "404", "message": "city not found"})),
    }
}

/// Bind on an ephemeral port and serve until stopped.
pub async fn start() -> FakeUpstream {
    let server = HttpServer::new(|| {
        App::new()
            .route("/v3.1/name/{name}", web::get().to(country))
            .route("/data/2.5/weather", web::get().to(weather))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    FakeUpstream {
        base: Url::parse(&format!("http://{addr}/")).unwrap(),
        handle,
    }
}
