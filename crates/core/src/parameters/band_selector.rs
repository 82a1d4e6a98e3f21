use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::parameter_model::{BandSelection, Parameter, ParameterBand};
use crate::errors::{ResolutionError, Result, ValidationError};
use crate::utils::decimal_utils::checked_sum;

/// Validated snapshot of the parameter/band catalog.
///
/// Bands are grouped by parameter and sorted ascending by
/// `min_range_in_meters`. Within a parameter, ranges never overlap (touching
/// boundaries are allowed).
#[derive(Debug, Clone, Default)]
pub struct ParameterCatalog {
    parameters: Vec<Parameter>,
    bands_by_parameter: HashMap<String, Vec<ParameterBand>>,
}

impl ParameterCatalog {
    pub fn new(parameters: Vec<Parameter>, bands: Vec<ParameterBand>) -> Result<Self> {
        let known: HashSet<&str> = parameters.iter().map(|p| p.id.as_str()).collect();
        let mut bands_by_parameter: HashMap<String, Vec<ParameterBand>> = HashMap::new();

        for band in bands {
            if !known.contains(band.parameter_id.as_str()) {
                return Err(ResolutionError::InvalidCatalog(format!(
                    "band '{}' belongs to unknown parameter '{}'",
                    band.id, band.parameter_id
                ))
                .into());
            }
            if band.weight_percent < -Decimal::ONE_HUNDRED {
                return Err(ResolutionError::InvalidCatalog(format!(
                    "band '{}' has weight {}% below -100%",
                    band.id, band.weight_percent
                ))
                .into());
            }
            if band.min_range_in_meters > band.max_range_in_meters {
                return Err(ResolutionError::InvalidCatalog(format!(
                    "band '{}' has min {} above max {}",
                    band.id, band.min_range_in_meters, band.max_range_in_meters
                ))
                .into());
            }
            bands_by_parameter
                .entry(band.parameter_id.clone())
                .or_default()
                .push(band);
        }

        for (parameter_id, bands) in bands_by_parameter.iter_mut() {
            bands.sort_by(|a, b| a.min_range_in_meters.cmp(&b.min_range_in_meters));
            if let Some(pair) = bands
                .windows(2)
                .find(|pair| pair[1].min_range_in_meters < pair[0].max_range_in_meters)
            {
                return Err(ResolutionError::InvalidCatalog(format!(
                    "bands '{}' and '{}' of parameter '{}' overlap",
                    pair[0].id, pair[1].id, parameter_id
                ))
                .into());
            }
        }

        Ok(Self {
            parameters,
            bands_by_parameter,
        })
    }

    /// Active parameters, in catalog order.
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.parameters.iter().filter(|p| p.is_active).collect()
    }

    /// Candidate bands of one category, sorted by `min_range_in_meters`.
    ///
    /// Inactive or unknown categories have no candidates.
    pub fn bands_for(&self, category: &str) -> &[ParameterBand] {
        let active = self
            .parameters
            .iter()
            .any(|p| p.id == category && p.is_active);
        if !active {
            return &[];
        }
        self.bands_by_parameter
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The band the user picked, constrained to the category's candidate list.
    ///
    /// There is no automatic pick by distance.
    pub fn select_band(&self, category: &str, band_id: &str) -> Option<&ParameterBand> {
        self.bands_for(category).iter().find(|b| b.id == band_id)
    }

    /// Validates a set of selections and returns the chosen bands.
    ///
    /// At most one band per category; every band must exist in its category.
    pub fn resolve_selections(&self, selections: &[BandSelection]) -> Result<Vec<ParameterBand>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut chosen = Vec::with_capacity(selections.len());

        for selection in selections {
            if !seen.insert(selection.parameter_id.as_str()) {
                return Err(ValidationError::InvalidInput(format!(
                    "more than one band selected for parameter '{}'",
                    selection.parameter_id
                ))
                .into());
            }
            let band = self
                .select_band(&selection.parameter_id, &selection.band_id)
                .ok_or_else(|| ResolutionError::NotFound {
                    what: format!("Band of parameter '{}'", selection.parameter_id),
                    code: selection.band_id.clone(),
                })?;
            chosen.push(band.clone());
        }
        Ok(chosen)
    }
}

/// Sum of the weights of the selected bands.
pub fn cumulative_weight(bands: &[ParameterBand]) -> Result<Decimal> {
    checked_sum(bands.iter().map(|band| band.weight_percent), "band weights")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn parameter(id: &str) -> Parameter {
        Parameter {
            id: id.to_string(),
            name: id.replace('-', " "),
            is_active: true,
        }
    }

    fn band(id: &str, parameter_id: &str, min: Decimal, max: Decimal, weight: Decimal) -> ParameterBand {
        ParameterBand {
            id: id.to_string(),
            parameter_id: parameter_id.to_string(),
            label: format!("{}-{} m", min, max),
            min_range_in_meters: min,
            max_range_in_meters: max,
            weight_percent: weight,
        }
    }

    fn catalog() -> ParameterCatalog {
        ParameterCatalog::new(
            vec![parameter("main-road"), parameter("metal-road"), parameter("main-market")],
            vec![
                band("mr-far", "main-road", dec!(500), dec!(1000), dec!(2)),
                band("mr-near", "main-road", dec!(0), dec!(100), dec!(10)),
                band("mr-mid", "main-road", dec!(100), dec!(500), dec!(5)),
                band("metal-on", "metal-road", dec!(0), dec!(50), dec!(4)),
                band("mkt-near", "main-market", dec!(0), dec!(1000), dec!(3)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bands_are_filtered_and_sorted() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog
            .bands_for("main-road")
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["mr-near", "mr-mid", "mr-far"]);
        assert!(catalog.bands_for("unknown").is_empty());
    }

    #[test]
    fn test_select_band_is_constrained_to_category() {
        let catalog = catalog();
        assert!(catalog.select_band("main-road", "mr-mid").is_some());
        assert!(catalog.select_band("metal-road", "mr-mid").is_none());
    }

    #[test]
    fn test_weights_add_across_categories() {
        let catalog = catalog();
        let chosen = catalog
            .resolve_selections(&[
                BandSelection::new("main-road", "mr-near"),
                BandSelection::new("metal-road", "metal-on"),
                BandSelection::new("main-market", "mkt-near"),
            ])
            .unwrap();
        assert_eq!(cumulative_weight(&chosen).unwrap(), dec!(17));
    }

    #[test]
    fn test_two_bands_in_one_category_rejected() {
        let catalog = catalog();
        let result = catalog.resolve_selections(&[
            BandSelection::new("main-road", "mr-near"),
            BandSelection::new("main-road", "mr-far"),
        ]);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_unknown_band_is_not_found() {
        let result = catalog().resolve_selections(&[BandSelection::new("main-road", "nope")]);
        assert!(matches!(
            result,
            Err(Error::Resolution(ResolutionError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_overlapping_bands_rejected() {
        let result = ParameterCatalog::new(
            vec![parameter("main-road")],
            vec![
                band("a", "main-road", dec!(0), dec!(150), dec!(10)),
                band("b", "main-road", dec!(100), dec!(500), dec!(5)),
            ],
        );
        assert!(matches!(
            result,
            Err(Error::Resolution(ResolutionError::InvalidCatalog(_)))
        ));
    }

    #[test]
    fn test_inactive_parameter_offers_no_bands() {
        let mut inactive = parameter("main-road");
        inactive.is_active = false;
        let catalog = ParameterCatalog::new(
            vec![inactive],
            vec![band("a", "main-road", dec!(0), dec!(100), dec!(10))],
        )
        .unwrap();
        assert!(catalog.bands_for("main-road").is_empty());
        assert!(catalog.parameters().is_empty());
    }

    #[test]
    fn test_weight_below_minus_hundred_rejected() {
        let result = ParameterCatalog::new(
            vec![parameter("main-road")],
            vec![band("a", "main-road", dec!(0), dec!(100), dec!(-150))],
        );
        assert!(matches!(
            result,
            Err(Error::Resolution(ResolutionError::InvalidCatalog(_)))
        ));

        let full_discount = ParameterCatalog::new(
            vec![parameter("main-road")],
            vec![band("a", "main-road", dec!(0), dec!(100), dec!(-100))],
        );
        assert!(full_discount.is_ok());
    }

    #[test]
    fn test_cumulative_weight_overflow_is_an_error() {
        let bands = vec![
            band("a", "main-road", dec!(0), dec!(1), Decimal::MAX),
            band("b", "metal-road", dec!(0), dec!(1), Decimal::MAX),
        ];
        assert!(matches!(
            cumulative_weight(&bands),
            Err(Error::Calculation(_))
        ));
    }
}
