use cities_backend::clients::{LookupError, OpenWeatherClient, WeatherLookup};

use super::fake_upstream::{self, API_KEY};

#[actix_web::test]
async fn known_city_returns_metric_weather() {
    let upstream = fake_upstream::start().await;
    let client = OpenWeatherClient::new(
        reqwest::Client::new(),
        upstream.weather_base(),
        Some(API_KEY.to_string()),
    );

    let weather = client.current_weather("Paris").await.unwrap().unwrap();
    assert_eq!(weather.temperature, 18.5);
    assert_eq!(weather.description, "light rain");
    assert_eq!(weather.humidity, 81.0);
    assert_eq!(weather.wind_speed, 4.2);

    // Non-ASCII names are query-encoded.
    assert!(client.current_weather("São Paulo").await.unwrap().is_some());

    upstream.stop().await;
}

#[actix_web::test]
async fn upstream_errors_surface_as_lookup_errors() {
    let upstream = fake_upstream::start().await;
    let client = OpenWeatherClient::new(
        reqwest::Client::new(),
        upstream.weather_base(),
        Some(API_KEY.to_string()),
    );

    assert!(matches!(
        client.current_weather("Nowhere").await,
        Err(LookupError::Status(404))
    ));
    assert!(matches!(
        client.current_weather("Empty").await,
        Err(LookupError::Schema(_))
    ));

    let wrong_key = OpenWeatherClient::new(
        reqwest::Client::new(),
        upstream.weather_base(),
        Some("wrong".to_string()),
    );
    assert!(matches!(
        wrong_key.current_weather("Paris").await,
        Err(LookupError::Status(401))
    ));

    upstream.stop().await;
}

#[actix_web::test]
async fn blank_key_is_not_configured() {
    let upstream = fake_upstream::start().await;
    let client = OpenWeatherClient::new(
        reqwest::Client::new(),
        upstream.weather_base(),
        Some("   ".to_string()),
    );

    assert!(matches!(
        client.current_weather("Paris").await,
        Err(LookupError::NotConfigured)
    ));

    upstream.stop().await;
}
