use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cost_of_living_forecaster::config::{Config, DEFAULT_LOG_FILTER};
use cost_of_living_forecaster::forecaster::Forecaster;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let forecaster = Forecaster::load(&config.model_path, &config.schema_path).map_err(|e| {
        tracing::error!("Failed to load forecaster: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    tracing::info!(
        areas = ?forecaster.schema().areas().collect::<Vec<_>>(),
        "Serving cost of living forecasts"
    );
    let forecaster = web::Data::new(forecaster);

    tracing::info!(
        "Server running at http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(forecaster.clone())
            .configure(cost_of_living_forecaster::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
