//! Location parameters module - distance bands, their weights and selection rules.

mod band_selector;
mod parameter_model;
mod parameter_service;
mod parameter_traits;

pub use band_selector::{cumulative_weight, ParameterCatalog};
pub use parameter_model::{BandSelection, Parameter, ParameterBand};
pub use parameter_service::ParameterService;
pub use parameter_traits::{ParameterRepositoryTrait, ParameterServiceTrait};
