use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;

use crate::errors::Result;
use crate::valuation::{EngineSettings, ValuationRequest, ValuationResult, ValuationServiceTrait};

/// Collapses a burst of input changes into a single per-unit preview.
///
/// Every call to [`PreviewDebouncer::schedule`] starts a new generation and
/// waits out the window. Only a call that is still the latest generation when
/// the window ends runs its computation, and its result is only handed back
/// if no newer call arrived while it was computing.
#[derive(Debug)]
pub struct PreviewDebouncer {
    window: Duration,
    generation: AtomicU64,
}

impl Default for PreviewDebouncer {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl PreviewDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: AtomicU64::new(0),
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.preview_debounce)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `None` when the call was superseded.
    pub async fn schedule<T, F, Fut>(&self, compute: F) -> Option<Result<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;

        if !self.is_current(generation) {
            debug!("Preview generation {} superseded before computing", generation);
            return None;
        }

        let outcome = compute().await;
        if !self.is_current(generation) {
            debug!("Preview generation {} superseded while computing", generation);
            return None;
        }
        Some(outcome)
    }

    /// Debounced per-unit preview through the valuation service.
    pub async fn preview(
        &self,
        service: &dyn ValuationServiceTrait,
        request: &ValuationRequest,
    ) -> Option<Result<ValuationResult>> {
        self.schedule(|| service.compute_unit_valuation(request))
            .await
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
