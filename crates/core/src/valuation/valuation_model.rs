//! Valuation request and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::area::AreaDetails;
use crate::errors::{Result, ValidationError};
use crate::factors::{FactorOutcome, FactorQuery, FactorSource};
use crate::hierarchy::{HierarchyLevel, SelectedCodes};
use crate::parameters::{BandSelection, ParameterBand};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaType {
    #[default]
    Rural,
    Urban,
}

/// Which land category drives the land-use adjustment.
///
/// Chosen once per request from the `land_use_change` flag, never from which
/// ids happen to be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandUse {
    Current {
        #[serde(rename = "categoryId")]
        category_id: String,
    },
    Proposed {
        #[serde(rename = "currentCategoryId")]
        current_category_id: Option<String>,
        #[serde(rename = "categoryId")]
        category_id: String,
    },
}

impl LandUse {
    pub fn from_form(
        land_use_change: bool,
        current_category_id: Option<&str>,
        proposed_category_id: Option<&str>,
    ) -> Result<Self> {
        let current = current_category_id.map(str::trim).filter(|s| !s.is_empty());
        let proposed = proposed_category_id.map(str::trim).filter(|s| !s.is_empty());

        if land_use_change {
            let category_id = proposed.ok_or_else(|| {
                ValidationError::MissingField("proposedLandCategoryId".to_string())
            })?;
            Ok(LandUse::Proposed {
                current_category_id: current.map(str::to_string),
                category_id: category_id.to_string(),
            })
        } else {
            let category_id = current.ok_or_else(|| {
                ValidationError::MissingField("currentLandCategoryId".to_string())
            })?;
            Ok(LandUse::Current {
                category_id: category_id.to_string(),
            })
        }
    }

    /// The category whose increase applies.
    pub fn category_id(&self) -> &str {
        match self {
            LandUse::Current { category_id } | LandUse::Proposed { category_id, .. } => {
                category_id
            }
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, LandUse::Proposed { .. })
    }
}

/// Flat plot attributes that may carry a configured weight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlotAttributes {
    #[serde(default)]
    pub corner_plot: bool,
    #[serde(default)]
    pub litigated: bool,
    #[serde(default)]
    pub tenanted: bool,
}

/// Everything the form submits for one computation.
///
/// Hierarchy codes are optional so an incomplete form can still be
/// represented; [`ValuationRequest::validate`] reports the first missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    pub district_code: Option<String>,
    pub circle_code: Option<String>,
    pub mouza_code: Option<String>,
    pub lot_code: Option<String>,
    #[serde(default)]
    pub village_code: Option<String>,
    #[serde(default)]
    pub daag_number: Option<String>,
    #[serde(default)]
    pub land_use_change: bool,
    pub current_land_category_id: Option<String>,
    #[serde(default)]
    pub proposed_land_category_id: Option<String>,
    #[serde(default)]
    pub area_type: AreaType,
    #[serde(default)]
    pub area: AreaDetails,
    #[serde(default)]
    pub band_selections: Vec<BandSelection>,
    #[serde(default)]
    pub attributes: PlotAttributes,
}

impl ValuationRequest {
    pub fn codes(&self) -> SelectedCodes {
        SelectedCodes {
            district_code: self.district_code.clone(),
            circle_code: self.circle_code.clone(),
            mouza_code: self.mouza_code.clone(),
            lot_code: self.lot_code.clone(),
            village_code: self.village_code.clone(),
        }
    }

    /// Copies the hierarchy codes from a selection, leaving everything else untouched.
    pub fn apply_codes(&mut self, codes: &SelectedCodes) {
        self.district_code = codes.district_code.clone();
        self.circle_code = codes.circle_code.clone();
        self.mouza_code = codes.mouza_code.clone();
        self.lot_code = codes.lot_code.clone();
        self.village_code = codes.village_code.clone();
    }

    /// The same request with the area replaced by a single lessa.
    pub fn with_unit_area(&self) -> Self {
        Self {
            area: AreaDetails::one_lessa(),
            ..self.clone()
        }
    }

    /// Checks the required fields and fixes the land-use branch.
    pub fn validate(&self) -> Result<ValuationTarget> {
        let district_code = required(&self.district_code, HierarchyLevel::District)?;
        let circle_code = required(&self.circle_code, HierarchyLevel::Circle)?;
        let mouza_code = required(&self.mouza_code, HierarchyLevel::Mouza)?;
        let lot_code = required(&self.lot_code, HierarchyLevel::Lot)?;
        let land_use = LandUse::from_form(
            self.land_use_change,
            self.current_land_category_id.as_deref(),
            self.proposed_land_category_id.as_deref(),
        )?;
        let total_lessa = self.area.total_lessa().map_err(|e| {
            ValidationError::InvalidInput(format!("area is too large to value: {}", e))
        })?;

        Ok(ValuationTarget {
            district_code,
            circle_code,
            mouza_code,
            lot_code,
            daag_number: self
                .daag_number
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            land_use,
            area_type: self.area_type,
            total_lessa,
            band_selections: self.band_selections.clone(),
            attributes: self.attributes,
        })
    }
}

fn required(value: &Option<String>, level: HierarchyLevel) -> Result<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::MissingField(level.field_name().to_string()).into())
}

/// A request whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationTarget {
    pub district_code: String,
    pub circle_code: String,
    pub mouza_code: String,
    pub lot_code: String,
    pub daag_number: Option<String>,
    pub land_use: LandUse,
    pub area_type: AreaType,
    pub total_lessa: Decimal,
    pub band_selections: Vec<BandSelection>,
    pub attributes: PlotAttributes,
}

impl ValuationTarget {
    pub fn factor_query(&self) -> FactorQuery {
        FactorQuery {
            district_code: self.district_code.clone(),
            circle_code: self.circle_code.clone(),
            lot_code: self.lot_code.clone(),
            daag_number: self.daag_number.clone(),
        }
    }
}

/// Fully resolved inputs of the formula engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValuationInputs {
    pub mouza_base: Decimal,
    pub lot_adjustment_percent: Decimal,
    pub land_use: LandUse,
    pub land_use_adjustment_percent: Decimal,
    pub factor: FactorOutcome,
    pub bands: Vec<ParameterBand>,
    pub attributes: PlotAttributes,
    pub area_type: AreaType,
    pub total_lessa: Decimal,
}

/// Every intermediate quantity of one computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationBreakdown {
    pub mouza_base: Decimal,
    pub lot_adjustment_percent: Decimal,
    pub land_use_change: bool,
    pub land_category_id: String,
    pub land_use_adjustment_percent: Decimal,
    pub plot_level_base: Decimal,
    pub geographical_factor: Decimal,
    /// `None` when no factor was recorded and the neutral default was applied.
    pub factor_source: Option<FactorSource>,
    pub location_weight_percent: Decimal,
    pub location_multiplier: Decimal,
    pub adjusted_plot_base: Decimal,
    pub per_unit_value: Decimal,
    pub total_lessa: Decimal,
    pub area_based_total: Decimal,
    pub area_type: AreaType,
    pub area_type_rate_percent: Decimal,
    pub total_value_with_rate: Decimal,
}

/// Outcome of one computation. A pure function of the resolved inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Total market valuation including the area-type rate.
    pub total_value: Decimal,
    pub per_unit_value: Decimal,
    pub breakdown: ValuationBreakdown,
}
