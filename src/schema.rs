//! Versioned description of the model's inputs and outputs.
//!
//! The schema ships next to the model artifact and is checked once at
//! startup, so request handling can trust column order and output labels.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::features::{AREA_PREFIX, MONTH_COLUMN, YEAR_COLUMN};
use crate::models::COST_CATEGORIES;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub version: u32,
    pub features: Vec<String>,
    pub outputs: Vec<String>,
}

impl FeatureSchema {
    /// Schema for a model trained on `Year`, `Month` and the given areas.
    pub fn for_areas<I, S>(areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut features = vec![YEAR_COLUMN.to_string(), MONTH_COLUMN.to_string()];
        features.extend(
            areas
                .into_iter()
                .map(|area| format!("{}{}", AREA_PREFIX, area.as_ref())),
        );
        FeatureSchema {
            version: SCHEMA_VERSION,
            features,
            outputs: COST_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ForecastError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: FeatureSchema =
            serde_json::from_str(&raw).map_err(|source| ForecastError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != SCHEMA_VERSION {
            return Err(ForecastError::InvalidSchema(format!(
                "unsupported version {}, expected {}",
                self.version, SCHEMA_VERSION
            )));
        }

        match self.features.as_slice() {
            [year, month, ..] if year == YEAR_COLUMN && month == MONTH_COLUMN => {}
            _ => {
                return Err(ForecastError::InvalidSchema(format!(
                    "features must start with {:?} and {:?}",
                    YEAR_COLUMN, MONTH_COLUMN
                )))
            }
        }

        let areas = self.area_columns();
        if areas.is_empty() {
            return Err(ForecastError::InvalidSchema(
                "no area columns declared".to_string(),
            ));
        }
        for col in areas {
            match col.strip_prefix(AREA_PREFIX) {
                Some(name) if !name.is_empty() => {}
                _ => {
                    return Err(ForecastError::InvalidSchema(format!(
                        "column {:?} is not an area column",
                        col
                    )))
                }
            }
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.features.iter().find(|f| !seen.insert(f.as_str())) {
            return Err(ForecastError::InvalidSchema(format!(
                "duplicate feature {:?}",
                dup
            )));
        }

        if self.outputs.iter().map(String::as_str).ne(COST_CATEGORIES) {
            return Err(ForecastError::InvalidSchema(format!(
                "outputs must be {:?}, got {:?}",
                COST_CATEGORIES, self.outputs
            )));
        }

        Ok(())
    }

    /// Every feature other than `Year` and `Month`.
    pub fn area_columns(&self) -> &[String] {
        self.features.get(2..).unwrap_or(&[])
    }

    /// Area names without the column prefix.
    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.area_columns()
            .iter()
            .filter_map(|col| col.strip_prefix(AREA_PREFIX))
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    pub fn n_outputs(&self) -> usize {
        self.outputs.len()
    }
}
