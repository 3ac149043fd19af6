//! Model backends behind a common inference interface.

use std::path::Path;

use crate::error::{ForecastError, Result};

mod linear;
mod onnx;

pub use linear::LinearRegressor;
pub use onnx::OnnxRegressor;

/// A loaded, read-only multi-output regression model.
pub trait Regressor: Send + Sync {
    /// Input feature names, when the artifact records them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Expected input width, when known before inference.
    fn n_features(&self) -> Option<usize>;

    /// Output width, when known before inference.
    fn n_outputs(&self) -> Option<usize>;

    /// Runs inference on a single row.
    fn predict(&self, row: &[f64]) -> Result<Vec<f64>>;
}

/// Loads a model artifact, choosing the backend by file extension.
///
/// `n_features` fixes the input shape for graph backends that leave it
/// symbolic.
pub fn load(path: &Path, n_features: usize) -> Result<Box<dyn Regressor>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("onnx") => Ok(Box::new(OnnxRegressor::load(path, n_features)?)),
        Some("json") => Ok(Box::new(LinearRegressor::load(path)?)),
        _ => Err(ForecastError::ModelLoad {
            path: path.to_path_buf(),
            reason: "unsupported model format, expected .onnx or .json".to_string(),
        }),
    }
}
