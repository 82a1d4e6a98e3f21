#[cfg(test)]
mod tests {
    use crate::errors::{CalculatorError, Error};
    use crate::factors::{FactorOutcome, FactorSource, ResolvedFactor};
    use crate::parameters::ParameterBand;
    use crate::valuation::{
        calculate_plot_level_base, calculate_valuation, location_multiplier, AreaType, LandUse,
        LocationAdjustmentStrategy, PlotAttributes, ResolvedValuationInputs, ValuationRules,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn inputs() -> ResolvedValuationInputs {
        ResolvedValuationInputs {
            mouza_base: dec!(100000),
            lot_adjustment_percent: dec!(10),
            land_use: LandUse::Current {
                category_id: "agri".to_string(),
            },
            land_use_adjustment_percent: dec!(5),
            factor: FactorOutcome::Unavailable,
            bands: Vec::new(),
            attributes: PlotAttributes::default(),
            area_type: AreaType::Rural,
            total_lessa: dec!(50),
        }
    }

    fn band(id: &str, parameter_id: &str, weight: Decimal) -> ParameterBand {
        ParameterBand {
            id: id.to_string(),
            parameter_id: parameter_id.to_string(),
            label: id.to_string(),
            min_range_in_meters: dec!(0),
            max_range_in_meters: dec!(100),
            weight_percent: weight,
        }
    }

    fn resolved(factor: Decimal, source: FactorSource) -> FactorOutcome {
        FactorOutcome::Resolved(ResolvedFactor { factor, source })
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate_valuation(&inputs(), &ValuationRules::default()).unwrap();

        assert_eq!(result.breakdown.plot_level_base, dec!(115500));
        assert_eq!(result.breakdown.adjusted_plot_base, dec!(115500));
        assert_eq!(result.per_unit_value, dec!(115500));
        assert_eq!(result.breakdown.area_based_total, dec!(5775000));
        assert_eq!(result.breakdown.area_type_rate_percent, dec!(2));
        assert_eq!(result.total_value, dec!(5890500));
        assert_eq!(result.breakdown.total_value_with_rate, dec!(5890500));
    }

    #[test]
    fn test_neutral_factor_is_reported_without_source() {
        let result = calculate_valuation(&inputs(), &ValuationRules::default()).unwrap();
        assert_eq!(result.breakdown.geographical_factor, Decimal::ONE);
        assert_eq!(result.breakdown.factor_source, None);
    }

    #[test]
    fn test_rural_rate_is_one_percent_above_urban() {
        let rules = ValuationRules::default();
        let rural = calculate_valuation(&inputs(), &rules).unwrap();
        let urban = calculate_valuation(
            &ResolvedValuationInputs {
                area_type: AreaType::Urban,
                ..inputs()
            },
            &rules,
        )
        .unwrap();

        assert_eq!(urban.total_value, dec!(5832750));
        assert_eq!(rural.total_value - urban.total_value, dec!(57750));
        assert_eq!(rural.breakdown.area_based_total, urban.breakdown.area_based_total);
    }

    #[test]
    fn test_land_use_flag_not_value_presence_drives_breakdown() {
        let proposed = ResolvedValuationInputs {
            land_use: LandUse::Proposed {
                current_category_id: Some("agri".to_string()),
                category_id: "commercial".to_string(),
            },
            land_use_adjustment_percent: dec!(0),
            ..inputs()
        };
        let result = calculate_valuation(&proposed, &ValuationRules::default()).unwrap();

        assert!(result.breakdown.land_use_change);
        assert_eq!(result.breakdown.land_category_id, "commercial");
        assert_eq!(result.breakdown.plot_level_base, dec!(110000));
    }

    #[test]
    fn test_rounding_happens_at_every_stage() {
        // 333.33 x 1.015 = 338.32995 -> 338, then 338 x 1.5 = 507
        let odd = ResolvedValuationInputs {
            mouza_base: dec!(333.33),
            lot_adjustment_percent: dec!(1.5),
            land_use_adjustment_percent: dec!(0),
            factor: resolved(dec!(1.5), FactorSource::Existing),
            total_lessa: dec!(3),
            ..inputs()
        };
        let result = calculate_valuation(&odd, &ValuationRules::default()).unwrap();

        assert_eq!(result.breakdown.plot_level_base, dec!(338));
        assert_eq!(result.breakdown.adjusted_plot_base, dec!(507));
        assert_eq!(result.breakdown.area_based_total, dec!(1521));
        // 507 x 3 x 1.02 = 1551.42
        assert_eq!(result.total_value, dec!(1551));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let base = calculate_plot_level_base(dec!(2.5), dec!(0), dec!(0)).unwrap();
        assert_eq!(base, dec!(3));
        let base = calculate_plot_level_base(dec!(3.5), dec!(0), dec!(0)).unwrap();
        assert_eq!(base, dec!(4));
    }

    #[test]
    fn test_factor_and_bands_apply_to_both_paths() {
        let weighted = ResolvedValuationInputs {
            factor: resolved(dec!(1.1), FactorSource::AutoAverage),
            bands: vec![
                band("mr-1", "main-road", dec!(10)),
                band("mt-2", "metal-road", dec!(5)),
            ],
            ..inputs()
        };
        let result = calculate_valuation(&weighted, &ValuationRules::default()).unwrap();

        // 115500 x 1.1 = 127050; x 1.15 = 146107.5 -> 146108
        assert_eq!(result.breakdown.location_weight_percent, dec!(15));
        assert_eq!(result.breakdown.location_multiplier, dec!(1.15));
        assert_eq!(result.breakdown.adjusted_plot_base, dec!(146108));
        assert_eq!(result.per_unit_value, dec!(146108));
        assert_eq!(result.breakdown.area_based_total, dec!(7305400));
        // 146108 x 50 x 1.02 = 7451508
        assert_eq!(result.total_value, dec!(7451508));
        assert_eq!(
            result.breakdown.factor_source,
            Some(FactorSource::AutoAverage)
        );
    }

    #[test]
    fn test_compounded_strategy_multiplies_weights() {
        let rules = ValuationRules {
            adjustment_strategy: LocationAdjustmentStrategy::Compounded,
            ..ValuationRules::default()
        };
        let weighted = ResolvedValuationInputs {
            bands: vec![
                band("mr-1", "main-road", dec!(10)),
                band("mt-2", "metal-road", dec!(10)),
            ],
            ..inputs()
        };
        let result = calculate_valuation(&weighted, &rules).unwrap();

        assert_eq!(result.breakdown.location_multiplier, dec!(1.21));
        // 115500 x 1.21 = 139755
        assert_eq!(result.breakdown.adjusted_plot_base, dec!(139755));
    }

    #[test]
    fn test_location_multiplier_strategies() {
        let weights = [dec!(10), dec!(-5)];
        assert_eq!(
            location_multiplier(&weights, LocationAdjustmentStrategy::Additive).unwrap(),
            dec!(1.05)
        );
        assert_eq!(
            location_multiplier(&weights, LocationAdjustmentStrategy::Compounded).unwrap(),
            dec!(1.045)
        );
        assert_eq!(
            location_multiplier(&[], LocationAdjustmentStrategy::Compounded).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_location_weights_below_minus_hundred_are_rejected() {
        let result = location_multiplier(&[dec!(-150)], LocationAdjustmentStrategy::Additive);
        assert!(matches!(
            result,
            Err(Error::Calculation(CalculatorError::Calculation(_)))
        ));
    }

    #[test]
    fn test_compounded_pair_of_deep_discounts_is_rejected() {
        // (1 - 1.5) x (1 - 1.5) would be positive again
        let result = location_multiplier(
            &[dec!(-150), dec!(-150)],
            LocationAdjustmentStrategy::Compounded,
        );
        assert!(matches!(
            result,
            Err(Error::Calculation(CalculatorError::Calculation(_)))
        ));
    }

    #[test]
    fn test_overflowing_band_weights_are_reported() {
        let heavy = ResolvedValuationInputs {
            bands: vec![
                band("a", "main-road", Decimal::MAX),
                band("b", "main-market", Decimal::MAX),
            ],
            ..inputs()
        };
        assert!(matches!(
            calculate_valuation(&heavy, &ValuationRules::default()),
            Err(Error::Calculation(CalculatorError::Overflow(_)))
        ));
    }

    #[test]
    fn test_attribute_weights_come_from_rules() {
        let rules = ValuationRules {
            corner_plot_weight_percent: dec!(10),
            litigated_weight_percent: dec!(-20),
            ..ValuationRules::default()
        };
        let corner = ResolvedValuationInputs {
            attributes: PlotAttributes {
                corner_plot: true,
                litigated: false,
                tenanted: true,
            },
            ..inputs()
        };
        let result = calculate_valuation(&corner, &rules).unwrap();

        assert_eq!(result.breakdown.location_weight_percent, dec!(10));
        assert_eq!(result.breakdown.adjusted_plot_base, dec!(127050));
    }

    #[test]
    fn test_zero_area_yields_zero_totals() {
        let empty = ResolvedValuationInputs {
            total_lessa: Decimal::ZERO,
            ..inputs()
        };
        let result = calculate_valuation(&empty, &ValuationRules::default()).unwrap();

        assert_eq!(result.per_unit_value, dec!(115500));
        assert_eq!(result.breakdown.area_based_total, Decimal::ZERO);
        assert_eq!(result.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_negative_mouza_base_is_rejected() {
        let negative = ResolvedValuationInputs {
            mouza_base: dec!(-1),
            ..inputs()
        };
        assert!(matches!(
            calculate_valuation(&negative, &ValuationRules::default()),
            Err(Error::Calculation(CalculatorError::Calculation(_)))
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        let huge = ResolvedValuationInputs {
            mouza_base: Decimal::MAX,
            lot_adjustment_percent: dec!(100),
            ..inputs()
        };
        assert!(matches!(
            calculate_valuation(&huge, &ValuationRules::default()),
            Err(Error::Calculation(CalculatorError::Overflow(_)))
        ));
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let rules = ValuationRules::default();
        let first = calculate_valuation(&inputs(), &rules).unwrap();
        let second = calculate_valuation(&inputs(), &rules).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_raising_lot_percent_never_lowers_plot_base() {
        let mut previous = Decimal::ZERO;
        for lot in 0..=50 {
            let base = calculate_plot_level_base(dec!(98765), Decimal::from(lot), dec!(7)).unwrap();
            assert!(base >= previous);
            previous = base;
        }
    }
}
