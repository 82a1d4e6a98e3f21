use log::debug;
use rust_decimal::Decimal;

use super::valuation_model::{ResolvedValuationInputs, ValuationBreakdown, ValuationResult};
use super::valuation_rules::{LocationAdjustmentStrategy, ValuationRules};
use crate::errors::{CalculatorError, Result};
use crate::parameters::cumulative_weight;
use crate::utils::decimal_utils::{checked_mul, checked_sum, percent_multiplier, round_currency};

/// Values produced by the base-and-location stages for a given area.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StageValues {
    plot_level_base: Decimal,
    location_weight_percent: Decimal,
    location_multiplier: Decimal,
    adjusted_plot_base: Decimal,
    area_value: Decimal,
}

/// Computes the guideline valuation of a plot from fully resolved inputs.
///
/// Stages, each rounded to whole currency units:
/// 1. plot-level base from mouza base, lot % and land-use %
/// 2. per-unit value: stages 1, 3 and 4 run for a single lessa
/// 3. location adjustment: geographical factor and band/attribute weights
/// 4. area-based total: per-unit value times total lessa
/// 5. total with the area-type market rate
///
/// The function is pure. Identical inputs give identical results.
pub fn calculate_valuation(
    inputs: &ResolvedValuationInputs,
    rules: &ValuationRules,
) -> Result<ValuationResult> {
    if inputs.mouza_base.is_sign_negative() {
        return Err(CalculatorError::Calculation(format!(
            "mouza base price {} is negative",
            inputs.mouza_base
        ))
        .into());
    }

    let unit = run_stages(inputs, rules, Decimal::ONE)?;
    let per_unit_value = unit.area_value;

    let area_based_total = round_currency(checked_mul(
        per_unit_value,
        inputs.total_lessa,
        "area based total",
    )?);

    let area_type_rate_percent = rules.area_rate_percent(inputs.area_type);
    let gross = checked_mul(
        unit.adjusted_plot_base,
        inputs.total_lessa,
        "total market valuation",
    )?;
    let total_value_with_rate = round_currency(checked_mul(
        gross,
        percent_multiplier(area_type_rate_percent),
        "total market valuation",
    )?);

    debug!(
        "Valuation: base {} -> plot {} -> adjusted {} x {} lessa = {} (with rate {})",
        inputs.mouza_base,
        unit.plot_level_base,
        unit.adjusted_plot_base,
        inputs.total_lessa,
        area_based_total,
        total_value_with_rate
    );

    Ok(ValuationResult {
        total_value: total_value_with_rate,
        per_unit_value,
        breakdown: ValuationBreakdown {
            mouza_base: inputs.mouza_base,
            lot_adjustment_percent: inputs.lot_adjustment_percent,
            land_use_change: inputs.land_use.is_change(),
            land_category_id: inputs.land_use.category_id().to_string(),
            land_use_adjustment_percent: inputs.land_use_adjustment_percent,
            plot_level_base: unit.plot_level_base,
            geographical_factor: inputs.factor.factor_or_neutral(),
            factor_source: inputs.factor.source(),
            location_weight_percent: unit.location_weight_percent,
            location_multiplier: unit.location_multiplier,
            adjusted_plot_base: unit.adjusted_plot_base,
            per_unit_value,
            total_lessa: inputs.total_lessa,
            area_based_total,
            area_type: inputs.area_type,
            area_type_rate_percent,
            total_value_with_rate,
        },
    })
}

/// `round(mouza_base × (1 + lot%/100) × (1 + land_use%/100))`
pub fn calculate_plot_level_base(
    mouza_base: Decimal,
    lot_adjustment_percent: Decimal,
    land_use_adjustment_percent: Decimal,
) -> Result<Decimal> {
    let with_lot = checked_mul(
        mouza_base,
        percent_multiplier(lot_adjustment_percent),
        "plot level base",
    )?;
    let with_land_use = checked_mul(
        with_lot,
        percent_multiplier(land_use_adjustment_percent),
        "plot level base",
    )?;
    Ok(round_currency(with_land_use))
}

/// Combines location weights into one multiplier under `strategy`.
///
/// A single weight below -100% is rejected under either strategy.
pub fn location_multiplier(
    weights: &[Decimal],
    strategy: LocationAdjustmentStrategy,
) -> Result<Decimal> {
    if let Some(weight) = weights.iter().find(|w| **w < -Decimal::ONE_HUNDRED) {
        return Err(CalculatorError::Calculation(format!(
            "location weight {}% is below -100%",
            weight
        ))
        .into());
    }

    let multiplier = match strategy {
        LocationAdjustmentStrategy::Additive => {
            percent_multiplier(checked_sum(weights.iter().copied(), "location weights")?)
        }
        LocationAdjustmentStrategy::Compounded => {
            weights.iter().try_fold(Decimal::ONE, |acc, weight| {
                checked_mul(acc, percent_multiplier(*weight), "location multiplier")
            })?
        }
    };

    if multiplier.is_sign_negative() {
        return Err(CalculatorError::Calculation(format!(
            "location weights {:?} reduce the value below zero",
            weights
        ))
        .into());
    }
    Ok(multiplier)
}

fn run_stages(
    inputs: &ResolvedValuationInputs,
    rules: &ValuationRules,
    total_lessa: Decimal,
) -> Result<StageValues> {
    let plot_level_base = calculate_plot_level_base(
        inputs.mouza_base,
        inputs.lot_adjustment_percent,
        inputs.land_use_adjustment_percent,
    )?;

    let attribute_weights = rules.attribute_weights(&inputs.attributes);
    let location_weight_percent = checked_sum(
        [
            cumulative_weight(&inputs.bands)?,
            checked_sum(attribute_weights.iter().copied(), "attribute weights")?,
        ],
        "location weights",
    )?;

    let mut weights: Vec<Decimal> = inputs.bands.iter().map(|band| band.weight_percent).collect();
    weights.extend(attribute_weights);
    let multiplier = location_multiplier(&weights, rules.adjustment_strategy)?;

    let factored = checked_mul(
        plot_level_base,
        inputs.factor.factor_or_neutral(),
        "adjusted plot base",
    )?;
    let adjusted_plot_base =
        round_currency(checked_mul(factored, multiplier, "adjusted plot base")?);

    let area_value = round_currency(checked_mul(adjusted_plot_base, total_lessa, "area value")?);

    Ok(StageValues {
        plot_level_base,
        location_weight_percent,
        location_multiplier: multiplier,
        adjusted_plot_base,
        area_value,
    })
}
