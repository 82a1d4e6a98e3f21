use super::history_model::CalculationHistoryEntry;
use crate::errors::Result;
use crate::valuation::{ValuationRequest, ValuationResult};

/// Storage seam for the calculation history.
pub trait CalculationHistoryRepositoryTrait: Send + Sync {
    /// Appends a new entry, evicting the oldest ones beyond capacity.
    fn record(
        &self,
        request: ValuationRequest,
        result: ValuationResult,
    ) -> Result<CalculationHistoryEntry>;

    /// Entries, newest first.
    fn list(&self) -> Result<Vec<CalculationHistoryEntry>>;

    fn get(&self, id: &str) -> Result<CalculationHistoryEntry>;

    fn clear(&self) -> Result<()>;
}
