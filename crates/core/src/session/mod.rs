//! Form session module - current form state, versioned drafts, history
//! re-activation and the debounced per-unit preview.

mod preview_debouncer;
mod session_model;
mod valuation_session;

pub use preview_debouncer::PreviewDebouncer;
pub use session_model::FormDraft;
pub use valuation_session::ValuationSession;
