//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after a computation or restore.
///
/// Runtime adapters translate them into platform-specific actions
/// (notifications, audit trail, cache refreshes).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A full valuation was computed and recorded in the history.
    ValuationComputed {
        history_id: String,
        mouza_code: String,
        total_value: Decimal,
    },

    /// A history entry was re-activated as the current form state.
    HistoryRestored { history_id: String },
}

impl DomainEvent {
    /// Creates a ValuationComputed event.
    pub fn valuation_computed(history_id: String, mouza_code: String, total_value: Decimal) -> Self {
        Self::ValuationComputed {
            history_id,
            mouza_code,
            total_value,
        }
    }

    /// Creates a HistoryRestored event.
    pub fn history_restored(history_id: String) -> Self {
        Self::HistoryRestored { history_id }
    }
}
