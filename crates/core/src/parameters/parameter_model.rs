//! Location parameter domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A location characteristic category, e.g. "Distance from Main Road".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

/// One distance band of a parameter and the weight it contributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterBand {
    pub id: String,
    pub parameter_id: String,
    pub label: String,
    pub min_range_in_meters: Decimal,
    pub max_range_in_meters: Decimal,
    pub weight_percent: Decimal,
}

/// The band a user picked for one parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BandSelection {
    pub parameter_id: String,
    pub band_id: String,
}

impl BandSelection {
    pub fn new(parameter_id: impl Into<String>, band_id: impl Into<String>) -> Self {
        Self {
            parameter_id: parameter_id.into(),
            band_id: band_id.into(),
        }
    }
}
