use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Classification {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Moderately Healthy")]
    ModeratelyHealthy,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
}

impl Classification {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Classification::Healthy => "Healthy",
            Classification::ModeratelyHealthy => "Moderately Healthy",
            Classification::Unhealthy => "Unhealthy",
        }
    }

    /// Parses a label as stored in the `classification` column.
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        match label {
            "Healthy" => Some(Classification::Healthy),
            "Moderately Healthy" => Some(Classification::ModeratelyHealthy),
            "Unhealthy" => Some(Classification::Unhealthy),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct FoodRecord {
    pub id: i32,
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub classification: Classification,
}

// row shape as loaded from food_data, column order matches schema.rs
pub(crate) type FoodRow = (i32, String, f64, f64, String);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewFood {
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub classification: Classification,
}
