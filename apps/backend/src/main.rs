use actix_web::{web, App, HttpServer};
use cities_backend::config::{DbProfile, EnrichmentConfig, ServerConfig};
use cities_backend::infra::state::build_state;
use cities_backend::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use cities_backend::routes;
use cities_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };
    let enrichment = match EnrichmentConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid enrichment configuration");
            std::process::exit(1);
        }
    };
    if enrichment.weather_api_key.is_none() {
        info!("OPENWEATHER_API_KEY not set; weather will use placeholders");
    }

    let http = match reqwest::Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_enrichment_config(&enrichment, http)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let origins = server.cors_origins.clone();

    info!(host = %server.host, port = server.port, "starting cities backend");

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(SecurityHeaders)
            .wrap(cors_middleware(&origins))
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(server.bind_addr())?
    .run()
    .await
}
