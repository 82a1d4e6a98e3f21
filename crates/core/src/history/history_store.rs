use std::collections::VecDeque;
use std::sync::RwLock;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::history_model::CalculationHistoryEntry;
use super::history_traits::CalculationHistoryRepositoryTrait;
use crate::constants::HISTORY_CAPACITY;
use crate::errors::{HistoryError, Result};
use crate::valuation::{ValuationRequest, ValuationResult};

/// Bounded in-memory ring of recent computations. Oldest entries are evicted first.
pub struct InMemoryHistoryStore {
    capacity: usize,
    entries: RwLock<VecDeque<CalculationHistoryEntry>>,
}

impl InMemoryHistoryStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity + 1)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl CalculationHistoryRepositoryTrait for InMemoryHistoryStore {
    fn record(
        &self,
        request: ValuationRequest,
        result: ValuationResult,
    ) -> Result<CalculationHistoryEntry> {
        let entry = CalculationHistoryEntry {
            id: Uuid::now_v7().to_string(),
            timestamp: Utc::now(),
            request,
            result,
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|e| HistoryError::LockPoisoned(e.to_string()))?;
        entries.push_back(entry.clone());
        while entries.len() > self.capacity {
            if let Some(evicted) = entries.pop_front() {
                debug!("Evicted history entry {}", evicted.id);
            }
        }
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<CalculationHistoryEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| HistoryError::LockPoisoned(e.to_string()))?;
        Ok(entries.iter().rev().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<CalculationHistoryEntry> {
        let entries = self
            .entries
            .read()
            .map_err(|e| HistoryError::LockPoisoned(e.to_string()))?;
        entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| HistoryError::EntryNotFound(id.to_string()).into())
    }

    fn clear(&self) -> Result<()> {
        self.entries
            .write()
            .map_err(|e| HistoryError::LockPoisoned(e.to_string()))?
            .clear();
        Ok(())
    }
}
