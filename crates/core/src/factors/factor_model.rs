//! Geographical factor domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorSource {
    /// Recorded for the exact daag.
    Existing,
    /// Derived as the mean of the circle+lot records.
    AutoAverage,
}

/// Stored location-quality multiplier for a lot, optionally narrowed to one daag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeographicalFactor {
    pub id: String,
    pub district_code: String,
    pub circle_code: String,
    pub lot_code: String,
    pub daag_number: Option<String>,
    pub factor: Decimal,
    pub source: FactorSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FactorQuery {
    pub district_code: String,
    pub circle_code: String,
    pub lot_code: String,
    pub daag_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFactor {
    pub factor: Decimal,
    pub source: FactorSource,
}

/// Result of a factor lookup.
///
/// `Unavailable` is not an error: no record exists at any scope and the
/// caller has to pick the default explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorOutcome {
    Resolved(ResolvedFactor),
    Unavailable,
}

impl FactorOutcome {
    /// The factor to apply, using the neutral multiplier when nothing was found.
    pub fn factor_or_neutral(&self) -> Decimal {
        match self {
            FactorOutcome::Resolved(resolved) => resolved.factor,
            FactorOutcome::Unavailable => Decimal::ONE,
        }
    }

    pub fn source(&self) -> Option<FactorSource> {
        match self {
            FactorOutcome::Resolved(resolved) => Some(resolved.source),
            FactorOutcome::Unavailable => None,
        }
    }
}
