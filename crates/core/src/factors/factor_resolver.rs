use rust_decimal::Decimal;

use super::factor_model::{FactorOutcome, FactorSource, GeographicalFactor, ResolvedFactor};
use crate::constants::DECIMAL_PRECISION;

/// Resolves the factor for a daag from the records of its circle+lot scope.
///
/// An EXISTING record for the exact daag wins. Otherwise the mean of every
/// record in scope is used, whatever daag it belongs to. An empty scope is
/// `Unavailable`.
pub fn resolve_from_records(
    scope_records: &[GeographicalFactor],
    daag_number: Option<&str>,
) -> FactorOutcome {
    if let Some(exact) = daag_number.and_then(|daag| find_exact(scope_records, daag)) {
        return FactorOutcome::Resolved(ResolvedFactor {
            factor: exact.factor,
            source: FactorSource::Existing,
        });
    }

    match average_factor(scope_records) {
        Some(factor) => FactorOutcome::Resolved(ResolvedFactor {
            factor,
            source: FactorSource::AutoAverage,
        }),
        None => FactorOutcome::Unavailable,
    }
}

/// Finds the authoritative record for `daag`. Previously derived averages do not count.
pub fn find_exact<'a>(
    records: &'a [GeographicalFactor],
    daag: &str,
) -> Option<&'a GeographicalFactor> {
    let daag = daag.trim();
    records.iter().find(|record| {
        record.source == FactorSource::Existing
            && record
                .daag_number
                .as_deref()
                .is_some_and(|candidate| candidate.trim() == daag)
    })
}

/// Arithmetic mean of the factors, rounded to `DECIMAL_PRECISION` places.
pub fn average_factor(records: &[GeographicalFactor]) -> Option<Decimal> {
    if records.is_empty() {
        return None;
    }
    let sum: Decimal = records.iter().map(|record| record.factor).sum();
    let mean = sum / Decimal::from(records.len());
    Some(mean.round_dp(DECIMAL_PRECISION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: &str, daag: Option<&str>, factor: Decimal) -> GeographicalFactor {
        GeographicalFactor {
            id: id.to_string(),
            district_code: "D01".to_string(),
            circle_code: "C01".to_string(),
            lot_code: "L01".to_string(),
            daag_number: daag.map(str::to_string),
            factor,
            source: FactorSource::Existing,
        }
    }

    fn scope() -> Vec<GeographicalFactor> {
        vec![
            record("f-123", Some("123"), dec!(1.5)),
            record("f-a", Some("200"), dec!(1.0)),
            record("f-b", Some("201"), dec!(1.1)),
            record("f-c", None, dec!(1.2)),
        ]
    }

    #[test]
    fn test_exact_daag_is_authoritative() {
        let outcome = resolve_from_records(&scope(), Some("123"));
        assert_eq!(
            outcome,
            FactorOutcome::Resolved(ResolvedFactor {
                factor: dec!(1.5),
                source: FactorSource::Existing,
            })
        );
    }

    #[test]
    fn test_unknown_daag_averages_every_record_in_lot_scope() {
        let outcome = resolve_from_records(&scope(), Some("456"));
        // (1.5 + 1.0 + 1.1 + 1.2) / 4, including the daag-123 record
        assert_eq!(
            outcome,
            FactorOutcome::Resolved(ResolvedFactor {
                factor: dec!(1.2),
                source: FactorSource::AutoAverage,
            })
        );
    }

    #[test]
    fn test_missing_daag_uses_average() {
        let records = vec![record("a", None, dec!(0.9)), record("b", None, dec!(1.0))];
        let outcome = resolve_from_records(&records, None);
        assert_eq!(outcome.factor_or_neutral(), dec!(0.95));
        assert_eq!(outcome.source(), Some(FactorSource::AutoAverage));
    }

    #[test]
    fn test_empty_scope_is_unavailable_not_zero() {
        let outcome = resolve_from_records(&[], Some("123"));
        assert_eq!(outcome, FactorOutcome::Unavailable);
        assert_eq!(outcome.factor_or_neutral(), Decimal::ONE);
        assert_eq!(outcome.source(), None);
    }

    #[test]
    fn test_derived_record_for_daag_is_not_authoritative() {
        let mut derived = record("derived", Some("777"), dec!(2.0));
        derived.source = FactorSource::AutoAverage;
        let records = vec![derived, record("x", None, dec!(1.0))];

        let outcome = resolve_from_records(&records, Some("777"));
        assert_eq!(outcome.source(), Some(FactorSource::AutoAverage));
        assert_eq!(outcome.factor_or_neutral(), dec!(1.5));
    }

    #[test]
    fn test_average_is_rounded_to_six_places() {
        let records = vec![
            record("a", None, dec!(1)),
            record("b", None, dec!(1)),
            record("c", None, dec!(1.1)),
        ];
        assert_eq!(average_factor(&records), Some(dec!(1.033333)));
    }
}
