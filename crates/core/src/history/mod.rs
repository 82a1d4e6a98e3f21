//! Calculation history module - a bounded ring of recent computations.

mod history_model;
mod history_store;
mod history_traits;

pub use history_model::{CalculationHistoryEntry, RestoredCalculation};
pub use history_store::InMemoryHistoryStore;
pub use history_traits::CalculationHistoryRepositoryTrait;
