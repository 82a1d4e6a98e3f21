//! Geographical factor module - models, resolution rules and the lookup service.

mod factor_model;
mod factor_resolver;
mod factor_service;
mod factor_traits;

pub use factor_model::*;
pub use factor_resolver::{average_factor, find_exact, resolve_from_records};
pub use factor_service::FactorService;
pub use factor_traits::{FactorRepositoryTrait, FactorServiceTrait};
