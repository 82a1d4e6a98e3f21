//! Web domain event sink implementation.
//!
//! Receives domain events and sends them to a background queue worker.

use landval_core::events::{DomainEvent, DomainEventSink};
use tokio::sync::mpsc;

use super::queue_worker::event_queue_worker;

/// Domain event sink for the web server runtime.
///
/// 1. Create the sink with `new()` - this just creates the channel
/// 2. Call `start_worker()` from inside the runtime - this spawns the worker
///
/// Events emitted before the worker starts are buffered.
pub struct WebDomainEventSink {
    tx: mpsc::UnboundedSender<DomainEvent>,
    rx: std::sync::Mutex<Option<mpsc::UnboundedReceiver<DomainEvent>>>,
}

impl WebDomainEventSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            tx,
            rx: std::sync::Mutex::new(Some(rx)),
        }
    }

    /// Starts the background worker. Later calls are ignored.
    pub fn start_worker(&self) {
        let rx = match self.rx.lock() {
            Ok(mut guard) => guard.take(),
            Err(e) => {
                tracing::error!("Domain event receiver lock poisoned: {}", e);
                None
            }
        };

        match rx {
            Some(rx) => {
                tokio::spawn(event_queue_worker(rx));
            }
            None => tracing::warn!("Domain event worker already started"),
        }
    }

    #[cfg(test)]
    pub fn with_sender(tx: mpsc::UnboundedSender<DomainEvent>) -> Self {
        Self {
            tx,
            rx: std::sync::Mutex::new(None),
        }
    }
}

impl Default for WebDomainEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        // Domain events are best-effort; a closed channel drops the event.
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Failed to emit domain event: {}", e);
        }
    }
}
