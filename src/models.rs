use serde::{Deserialize, Serialize};

/// Output labels, in the order the model emits them.
pub const COST_CATEGORIES: [&str; 5] = ["rent", "food", "transportation", "utilities", "misc"];

pub const DEFAULT_YEAR: i64 = 2026;
pub const DEFAULT_AREA: &str = "Umoja";

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastQuery {
    #[serde(default = "default_year")]
    pub year: i64,
    #[serde(default = "default_area")]
    pub area: String,
}

fn default_year() -> i64 {
    DEFAULT_YEAR
}

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Breakdown {
    pub rent: f64,
    pub food: f64,
    pub transportation: f64,
    pub utilities: f64,
    pub misc: f64,
}

impl Breakdown {
    /// Maps positional model outputs onto the category labels.
    pub fn from_values(values: [f64; 5]) -> Self {
        let [rent, food, transportation, utilities, misc] = values;
        Breakdown {
            rent,
            food,
            transportation,
            utilities,
            misc,
        }
    }

    pub fn values(&self) -> [f64; 5] {
        [
            self.rent,
            self.food,
            self.transportation,
            self.utilities,
            self.misc,
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PredictionResult {
    pub predicted_total_cost: f64,
    pub breakdown: Breakdown,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    #[serde(rename = "Message")]
    pub message: String,
}
