use async_trait::async_trait;

use super::valuation_model::{ResolvedValuationInputs, ValuationRequest, ValuationResult};
use crate::errors::Result;
use crate::history::{CalculationHistoryEntry, RestoredCalculation};

/// Valuation use cases: resolve master data, compute, record and restore.
#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Validates the request and resolves every input of the formula engine.
    async fn resolve_inputs(&self, request: &ValuationRequest) -> Result<ResolvedValuationInputs>;

    /// Computes a full valuation and records it in the history.
    async fn compute_valuation(&self, request: &ValuationRequest) -> Result<ValuationResult>;

    /// Computes the value of a single lessa under the same selections. Not recorded.
    async fn compute_unit_valuation(&self, request: &ValuationRequest) -> Result<ValuationResult>;

    /// Records an already computed result.
    fn record_history(
        &self,
        request: ValuationRequest,
        result: ValuationResult,
    ) -> Result<CalculationHistoryEntry>;

    /// History entries, newest first.
    fn list_history(&self) -> Result<Vec<CalculationHistoryEntry>>;

    /// Hands back the stored inputs and result of an entry. Nothing is recomputed.
    fn restore_history(&self, id: &str) -> Result<RestoredCalculation>;
}
