//! Calculation history models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::valuation::{ValuationRequest, ValuationResult};

/// One completed computation: the submitted inputs and what they produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationHistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub request: ValuationRequest,
    pub result: ValuationResult,
}

/// A history entry handed back for re-activation. Nothing is recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestoredCalculation {
    pub entry_id: String,
    pub request: ValuationRequest,
    pub result: ValuationResult,
}

impl From<CalculationHistoryEntry> for RestoredCalculation {
    fn from(entry: CalculationHistoryEntry) -> Self {
        Self {
            entry_id: entry.id,
            request: entry.request,
            result: entry.result,
        }
    }
}
