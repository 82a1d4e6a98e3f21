use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use super::factor_model::{FactorOutcome, FactorQuery, FactorSource, ResolvedFactor};
use super::factor_resolver::resolve_from_records;
use super::factor_traits::{FactorRepositoryTrait, FactorServiceTrait};
use crate::errors::Result;
use crate::utils::lookup_utils::bounded_lookup;

pub struct FactorService {
    repository: Arc<dyn FactorRepositoryTrait>,
    lookup_timeout: Duration,
}

impl FactorService {
    pub fn new(repository: Arc<dyn FactorRepositoryTrait>, lookup_timeout: Duration) -> Self {
        Self {
            repository,
            lookup_timeout,
        }
    }
}

#[async_trait]
impl FactorServiceTrait for FactorService {
    async fn resolve_factor(&self, query: &FactorQuery) -> Result<FactorOutcome> {
        let daag = query
            .daag_number
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        if let Some(daag) = daag {
            let exact = bounded_lookup(
                "geographical factor",
                self.lookup_timeout,
                self.repository.find_factor_for_daag(
                    &query.district_code,
                    &query.circle_code,
                    &query.lot_code,
                    daag,
                ),
            )
            .await?;

            if let Some(record) = exact.filter(|r| r.source == FactorSource::Existing) {
                debug!(
                    "Using recorded factor {} for daag {} in lot {}",
                    record.factor, daag, query.lot_code
                );
                return Ok(FactorOutcome::Resolved(ResolvedFactor {
                    factor: record.factor,
                    source: FactorSource::Existing,
                }));
            }
        }

        let scope = bounded_lookup(
            "geographical factors",
            self.lookup_timeout,
            self.repository.list_factors_in_scope(
                &query.district_code,
                &query.circle_code,
                &query.lot_code,
            ),
        )
        .await?;

        let outcome = resolve_from_records(&scope, daag);
        if outcome == FactorOutcome::Unavailable {
            warn!(
                "No geographical factor recorded for {}/{}/{}",
                query.district_code, query.circle_code, query.lot_code
            );
        }
        Ok(outcome)
    }
}
