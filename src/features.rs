//! One-hot feature encoding for a single forecast request.

use crate::error::{ForecastError, Result};

pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const AREA_PREFIX: &str = "Area_";

/// A single record laid out exactly as the model saw it during training:
/// `Year`, `Month`, then one 0/1 column per known area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<i64>,
}

impl FeatureRow {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<i64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as model input.
    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }
}

/// Builds the feature row for `area`. Matching against `known_area_columns`
/// is exact and case-sensitive.
pub fn prepare(
    year: i64,
    month: i64,
    area: &str,
    known_area_columns: &[String],
) -> Result<FeatureRow> {
    let area_col = format!("{}{}", AREA_PREFIX, area);
    if !known_area_columns.iter().any(|c| *c == area_col) {
        return Err(ForecastError::UnknownArea {
            area: area.to_string(),
            expected: known_area_columns.to_vec(),
        });
    }

    let mut columns = Vec::with_capacity(known_area_columns.len() + 2);
    let mut values = Vec::with_capacity(known_area_columns.len() + 2);
    columns.push(YEAR_COLUMN.to_string());
    values.push(year);
    columns.push(MONTH_COLUMN.to_string());
    values.push(month);

    for col in known_area_columns {
        columns.push(col.clone());
        values.push(i64::from(*col == area_col));
    }

    Ok(FeatureRow { columns, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas() -> Vec<String> {
        vec![
            "Area_Umoja".to_string(),
            "Area_Kilimani".to_string(),
            "Area_Westlands".to_string(),
        ]
    }

    #[test]
    fn test_prepare_sets_year_and_month() {
        let row = prepare(2030, 6, "Kilimani", &areas()).unwrap();
        assert_eq!(row.get("Year"), Some(2030));
        assert_eq!(row.get("Month"), Some(6));
        assert_eq!(
            row.columns(),
            &["Year", "Month", "Area_Umoja", "Area_Kilimani", "Area_Westlands"]
        );
    }

    #[test]
    fn test_exactly_one_area_is_hot() {
        for area in ["Umoja", "Kilimani", "Westlands"] {
            let row = prepare(2026, 6, area, &areas()).unwrap();
            let hot: Vec<&String> = row.columns()[2..]
                .iter()
                .zip(&row.values()[2..])
                .filter(|(_, v)| **v == 1)
                .map(|(c, _)| c)
                .collect();
            assert_eq!(hot, vec![&format!("Area_{}", area)]);
            assert!(row.values()[2..].iter().all(|&v| v == 0 || v == 1));
        }
    }

    #[test]
    fn test_unknown_area_lists_choices() {
        let err = prepare(2026, 6, "Nonexistent", &areas()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown area"));
        assert!(message.contains("Nonexistent"));
        assert!(message.contains("'Area_Westlands'"));
    }

    #[test]
    fn test_area_match_is_case_sensitive() {
        assert!(prepare(2026, 6, "umoja", &areas()).is_err());
        assert!(prepare(2026, 6, " Umoja", &areas()).is_err());
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let first = prepare(1999, 6, "Umoja", &areas()).unwrap();
        let second = prepare(1999, 6, "Umoja", &areas()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_year_is_not_range_checked() {
        let row = prepare(-5, 42, "Umoja", &areas()).unwrap();
        assert_eq!(row.to_f64()[..2], [-5.0, 42.0]);
        assert_eq!(row.len(), 5);
    }
}
