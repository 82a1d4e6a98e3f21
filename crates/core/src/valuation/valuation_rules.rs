//! Configurable rate table for the formula engine.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::valuation_model::{AreaType, PlotAttributes};
use crate::constants::{
    DEFAULT_LOOKUP_TIMEOUT, DEFAULT_PREVIEW_DEBOUNCE, HISTORY_CAPACITY, RURAL_AREA_RATE_PERCENT,
    URBAN_AREA_RATE_PERCENT,
};
use crate::errors::{Result, ValidationError};

/// How location weights (bands and plot attributes) combine with the base.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationAdjustmentStrategy {
    /// `1 + Σw/100`: weights add up, then apply once.
    #[default]
    Additive,
    /// `Π(1 + w/100)`: each weight compounds on the previous ones.
    Compounded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationRules {
    pub rural_rate_percent: Decimal,
    pub urban_rate_percent: Decimal,
    pub corner_plot_weight_percent: Decimal,
    pub litigated_weight_percent: Decimal,
    pub tenanted_weight_percent: Decimal,
    pub adjustment_strategy: LocationAdjustmentStrategy,
}

impl Default for ValuationRules {
    fn default() -> Self {
        Self {
            rural_rate_percent: Decimal::from(RURAL_AREA_RATE_PERCENT),
            urban_rate_percent: Decimal::from(URBAN_AREA_RATE_PERCENT),
            corner_plot_weight_percent: Decimal::ZERO,
            litigated_weight_percent: Decimal::ZERO,
            tenanted_weight_percent: Decimal::ZERO,
            adjustment_strategy: LocationAdjustmentStrategy::Additive,
        }
    }
}

impl ValuationRules {
    pub fn area_rate_percent(&self, area_type: AreaType) -> Decimal {
        match area_type {
            AreaType::Rural => self.rural_rate_percent,
            AreaType::Urban => self.urban_rate_percent,
        }
    }

    /// Rejects rates and attribute weights below -100%, which would turn a
    /// value negative or, once compounded, flip its sign back.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("ruralRatePercent", self.rural_rate_percent),
            ("urbanRatePercent", self.urban_rate_percent),
            ("cornerPlotWeightPercent", self.corner_plot_weight_percent),
            ("litigatedWeightPercent", self.litigated_weight_percent),
            ("tenantedWeightPercent", self.tenanted_weight_percent),
        ];
        for (field, percent) in checks {
            if percent < -Decimal::ONE_HUNDRED {
                return Err(ValidationError::InvalidInput(format!(
                    "{} is {}%, below -100%",
                    field, percent
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Weights of the attributes that are set on the plot.
    pub fn attribute_weights(&self, attributes: &PlotAttributes) -> Vec<Decimal> {
        [
            (attributes.corner_plot, self.corner_plot_weight_percent),
            (attributes.litigated, self.litigated_weight_percent),
            (attributes.tenanted, self.tenanted_weight_percent),
        ]
        .into_iter()
        .filter(|(active, _)| *active)
        .map(|(_, weight)| weight)
        .collect()
    }
}

/// Runtime knobs of the valuation services.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub lookup_timeout: Duration,
    pub history_capacity: usize,
    pub preview_debounce: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            history_capacity: HISTORY_CAPACITY,
            preview_debounce: DEFAULT_PREVIEW_DEBOUNCE,
        }
    }
}
