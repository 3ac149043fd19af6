use std::path::Path;

use crate::error::{ForecastError, Result};
use crate::features;
use crate::models::{Breakdown, PredictionResult, COST_CATEGORIES};
use crate::regressor::{self, Regressor};
use crate::schema::FeatureSchema;

/// Every forecast is made for June of the requested year.
pub const FORECAST_MONTH: i64 = 6;

/// Owns the loaded model and turns `(year, area)` into a cost breakdown.
pub struct Forecaster {
    schema: FeatureSchema,
    model: Box<dyn Regressor>,
}

impl Forecaster {
    /// Pairs a model with its schema, failing if they disagree on shape.
    pub fn new(schema: FeatureSchema, model: Box<dyn Regressor>) -> Result<Self> {
        schema.validate()?;

        if let Some(n) = model.n_features() {
            if n != schema.n_features() {
                return Err(ForecastError::SchemaMismatch(format!(
                    "model takes {} features, schema declares {}",
                    n,
                    schema.n_features()
                )));
            }
        }
        if let Some(n) = model.n_outputs() {
            if n != schema.n_outputs() {
                return Err(ForecastError::SchemaMismatch(format!(
                    "model produces {} outputs, schema declares {}",
                    n,
                    schema.n_outputs()
                )));
            }
        }
        if let Some(names) = model.feature_names() {
            if names != schema.features.as_slice() {
                return Err(ForecastError::SchemaMismatch(format!(
                    "model features {:?} differ from schema features {:?}",
                    names, schema.features
                )));
            }
        }

        Ok(Forecaster { schema, model })
    }

    pub fn load(model_path: &Path, schema_path: &Path) -> Result<Self> {
        let schema = FeatureSchema::load(schema_path)?;
        let model = regressor::load(model_path, schema.n_features())?;
        let forecaster = Forecaster::new(schema, model)?;
        tracing::info!(
            model = %model_path.display(),
            areas = forecaster.schema.area_columns().len(),
            "forecaster ready"
        );
        Ok(forecaster)
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn predict(&self, year: i64, area: &str) -> Result<PredictionResult> {
        let row = features::prepare(year, FORECAST_MONTH, area, self.schema.area_columns())?;
        debug_assert_eq!(row.columns(), self.schema.features.as_slice());

        let output = self.model.predict(&row.to_f64())?;
        let values: [f64; 5] = output.as_slice().try_into().map_err(|_| {
            ForecastError::OutputShape {
                expected: COST_CATEGORIES.len(),
                actual: output.len(),
            }
        })?;
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(ForecastError::Inference(format!(
                "model returned non-finite value {}",
                bad
            )));
        }

        let total: f64 = values.iter().sum();
        tracing::debug!(year, area, total, "forecast computed");

        Ok(PredictionResult {
            predicted_total_cost: round2(total),
            breakdown: Breakdown::from_values(values.map(round2)),
        })
    }
}

/// Rounds to two decimal places. Exact ties go to the even digit.
pub fn round2(value: f64) -> f64 {
    // decimal formatting is correctly rounded, unlike scaling by 100
    format!("{:.2}", value).parse().unwrap_or(value)
}
