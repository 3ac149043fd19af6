use actix_web::{web, HttpResponse, Result};

use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::models::{ForecastQuery, WelcomeResponse};

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to the cost of living forecaster API".to_string(),
    })
}

pub async fn forecast(
    forecaster: web::Data<Forecaster>,
    query: web::Query<ForecastQuery>,
) -> Result<HttpResponse, ForecastError> {
    let ForecastQuery { year, area } = query.into_inner();

    // inference is CPU-bound, keep it off the async workers
    let result = web::block(move || forecaster.predict(year, &area))
        .await
        .map_err(|e| {
            tracing::error!("Forecast task was cancelled: {}", e);
            ForecastError::Inference("forecast task was cancelled".to_string())
        })?;

    match result {
        Ok(prediction) => Ok(HttpResponse::Ok().json(prediction)),
        Err(e) if e.is_client_error() => {
            tracing::warn!(year, "Rejected forecast request: {}", e);
            Err(e)
        }
        Err(e) => {
            tracing::error!(year, "Forecast failed: {}", e);
            Err(e)
        }
    }
}
