use landval_core::events::DomainEvent;
use tokio::sync::mpsc;

/// Drains the event channel until every sender is gone.
pub async fn event_queue_worker(mut rx: mpsc::UnboundedReceiver<DomainEvent>) {
    while let Some(event) = rx.recv().await {
        record_event(&event);
    }
    tracing::debug!("Domain event channel closed, worker exiting");
}

fn record_event(event: &DomainEvent) {
    match event {
        DomainEvent::ValuationComputed {
            history_id,
            mouza_code,
            total_value,
        } => {
            tracing::info!(
                target: "landval::audit",
                history_id = %history_id,
                mouza_code = %mouza_code,
                total_value = %total_value,
                "valuation computed"
            );
        }
        DomainEvent::HistoryRestored { history_id } => {
            tracing::info!(
                target: "landval::audit",
                history_id = %history_id,
                "history entry restored"
            );
        }
    }
}
