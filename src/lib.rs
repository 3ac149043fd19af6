//! HTTP service forecasting monthly cost-of-living components for an area.

pub mod config;
pub mod error;
pub mod features;
pub mod forecaster;
pub mod handlers;
pub mod models;
pub mod regressor;
pub mod schema;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use crate::models::ErrorResponse;

/// Registers the API routes. The caller provides the `web::Data<Forecaster>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse {
            error: err.to_string(),
        };
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    cfg.app_data(query_config)
        .service(web::resource("/").route(web::get().to(handlers::home)))
        .service(web::resource("/forecast").route(web::post().to(handlers::forecast)));
}
