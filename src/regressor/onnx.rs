//! ONNX graphs executed in-process with tract.

use std::path::Path;

use tract_onnx::prelude::*;

use super::Regressor;
use crate::error::{ForecastError, Result};

pub struct OnnxRegressor {
    n_features: usize,
    n_outputs: Option<usize>,
    plan: TypedRunnableModel<TypedModel>,
}

impl OnnxRegressor {
    /// Loads and optimizes the graph with a fixed `[1, n_features]` float input.
    pub fn load(path: &Path, n_features: usize) -> Result<Self> {
        let load_err = |stage: &str, e: TractError| ForecastError::ModelLoad {
            path: path.to_path_buf(),
            reason: format!("{}: {}", stage, e),
        };

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| load_err("read", e))?
            .with_input_fact(0, f32::fact([1, n_features]).into())
            .map_err(|e| load_err("input shape", e))?
            .into_optimized()
            .map_err(|e| load_err("optimize", e))?
            .into_runnable()
            .map_err(|e| load_err("initialize", e))?;

        let n_outputs = plan
            .model()
            .output_fact(0)
            .ok()
            .and_then(|fact| fact.shape.as_concrete().and_then(|dims| dims.last().copied()));

        tracing::debug!(
            path = %path.display(),
            n_features,
            ?n_outputs,
            "loaded ONNX model"
        );

        Ok(OnnxRegressor {
            n_features,
            n_outputs,
            plan,
        })
    }
}

impl Regressor for OnnxRegressor {
    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn n_outputs(&self) -> Option<usize> {
        self.n_outputs
    }

    fn predict(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.n_features {
            return Err(ForecastError::Inference(format!(
                "expected {} features, got {}",
                self.n_features,
                row.len()
            )));
        }

        let input: Vec<f32> = row.iter().map(|&v| v as f32).collect();
        let tensor = tract_ndarray::Array::from_shape_vec((1, self.n_features), input)
            .map_err(|e| ForecastError::Inference(e.to_string()))?
            .into_tensor();

        let result = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ForecastError::Inference(e.to_string()))?;

        let output = result
            .first()
            .ok_or_else(|| ForecastError::Inference("model produced no outputs".to_string()))?;
        let values = output
            .to_array_view::<f32>()
            .map_err(|e| ForecastError::Inference(e.to_string()))?;

        Ok(values.iter().map(|&v| f64::from(v)).collect())
    }
}
