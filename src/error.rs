//! Error types for the forecaster and its HTTP surface.

use std::path::PathBuf;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

pub type Result<T> = std::result::Result<T, ForecastError>;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Unknown area: {area}. Expected one of {}", quoted_list(.expected))]
    UnknownArea { area: String, expected: Vec<String> },

    #[error("Model returned {actual} values, expected {expected}")]
    OutputShape { expected: usize, actual: usize },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load model {}: {reason}", .path.display())]
    ModelLoad { path: PathBuf, reason: String },

    #[error("Invalid feature schema: {0}")]
    InvalidSchema(String),

    #[error("Model does not match feature schema: {0}")]
    SchemaMismatch(String),
}

impl ForecastError {
    /// True for errors the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ForecastError::UnknownArea { .. })
    }
}

impl ResponseError for ForecastError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {value:?}")]
    InvalidPort { value: String },
}

// Renders a column list as ['Area_A', 'Area_B'].
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_area_message() {
        let error = ForecastError::UnknownArea {
            area: "Nonexistent".to_string(),
            expected: vec!["Area_Umoja".to_string(), "Area_Kilimani".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Unknown area: Nonexistent. Expected one of ['Area_Umoja', 'Area_Kilimani']"
        );
    }

    #[test]
    fn test_unknown_area_is_bad_request() {
        let error = ForecastError::UnknownArea {
            area: "x".to_string(),
            expected: vec![],
        };
        assert!(error.is_client_error());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_errors_are_internal() {
        let error = ForecastError::OutputShape {
            expected: 5,
            actual: 3,
        };
        assert_eq!(error.to_string(), "Model returned 3 values, expected 5");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = ForecastError::Inference("graph exploded".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_empty_list_rendering() {
        assert_eq!(quoted_list(&[]), "[]");
    }
}
