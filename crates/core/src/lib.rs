//! Landval Core - guideline market valuation of land parcels.
//!
//! This crate holds the formula engine and everything it depends on: the
//! administrative hierarchy, geographical factors, location parameter bands,
//! the calculation history and the form session. It is transport-agnostic
//! and reaches master data only through the repository traits, which the
//! server crate implements.

pub mod area;
pub mod constants;
pub mod errors;
pub mod events;
pub mod factors;
pub mod hierarchy;
pub mod history;
pub mod parameters;
pub mod session;
pub mod utils;
pub mod valuation;

// Re-export the types most callers need
pub use area::AreaDetails;
pub use valuation::{ValuationRequest, ValuationResult, ValuationService, ValuationServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
