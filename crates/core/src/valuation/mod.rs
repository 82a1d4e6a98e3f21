//! Valuation module - request/result models, the formula engine and the
//! service that resolves master data and feeds the engine.

mod valuation_calculator;
mod valuation_model;
mod valuation_rules;
mod valuation_service;
mod valuation_traits;

pub use valuation_calculator::{calculate_plot_level_base, calculate_valuation, location_multiplier};
pub use valuation_model::*;
pub use valuation_rules::{EngineSettings, LocationAdjustmentStrategy, ValuationRules};
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;

#[cfg(test)]
mod valuation_calculator_tests;
