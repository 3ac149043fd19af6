//! Linear multi-output regression stored as JSON.
//!
//! `coefficients` has one row per output and one column per feature,
//! matching how scikit-learn lays out `coef_` for multi-output models.

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

use super::Regressor;
use crate::error::{ForecastError, Result};

#[derive(Debug, Deserialize)]
struct LinearModelFile {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LinearRegressor {
    feature_names: Option<Vec<String>>,
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
}

impl LinearRegressor {
    pub fn new(coefficients: Array2<f64>, intercepts: Array1<f64>) -> Result<Self> {
        if coefficients.nrows() != intercepts.len() {
            return Err(ForecastError::SchemaMismatch(format!(
                "{} coefficient rows but {} intercepts",
                coefficients.nrows(),
                intercepts.len()
            )));
        }
        Ok(LinearRegressor {
            feature_names: None,
            coefficients,
            intercepts,
        })
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ForecastError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: LinearModelFile =
            serde_json::from_str(&raw).map_err(|source| ForecastError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let model_err = |reason: String| ForecastError::ModelLoad {
            path: path.to_path_buf(),
            reason,
        };

        let n_outputs = file.coefficients.len();
        let n_features = file.coefficients.first().map_or(0, Vec::len);
        if n_outputs == 0 || n_features == 0 {
            return Err(model_err("coefficient matrix is empty".to_string()));
        }
        if file.coefficients.iter().any(|row| row.len() != n_features) {
            return Err(model_err("coefficient rows differ in length".to_string()));
        }
        if let Some(names) = &file.feature_names {
            if names.len() != n_features {
                return Err(model_err(format!(
                    "{} feature names for {} coefficients per row",
                    names.len(),
                    n_features
                )));
            }
        }

        let flat: Vec<f64> = file.coefficients.into_iter().flatten().collect();
        let coefficients = Array2::from_shape_vec((n_outputs, n_features), flat)
            .map_err(|e| model_err(e.to_string()))?;
        let intercepts = Array1::from_vec(file.intercepts);

        let model = LinearRegressor::new(coefficients, intercepts)
            .map_err(|e| model_err(e.to_string()))?;
        Ok(match file.feature_names {
            Some(names) => model.with_feature_names(names),
            None => model,
        })
    }
}

impl Regressor for LinearRegressor {
    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.ncols())
    }

    fn n_outputs(&self) -> Option<usize> {
        Some(self.coefficients.nrows())
    }

    fn predict(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.coefficients.ncols() {
            return Err(ForecastError::Inference(format!(
                "expected {} features, got {}",
                self.coefficients.ncols(),
                row.len()
            )));
        }
        let x = ArrayView1::from(row);
        let y = self.coefficients.dot(&x) + &self.intercepts;
        Ok(y.to_vec())
    }
}
