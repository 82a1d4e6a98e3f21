use async_trait::async_trait;

use super::factor_model::{FactorOutcome, FactorQuery, GeographicalFactor};
use crate::errors::Result;

/// Read-only geographical factor collaborator.
#[async_trait]
pub trait FactorRepositoryTrait: Send + Sync {
    /// The record stored for one exact daag, if any.
    async fn find_factor_for_daag(
        &self,
        district_code: &str,
        circle_code: &str,
        lot_code: &str,
        daag_number: &str,
    ) -> Result<Option<GeographicalFactor>>;

    /// Every record stored under district+circle+lot, with or without a daag.
    async fn list_factors_in_scope(
        &self,
        district_code: &str,
        circle_code: &str,
        lot_code: &str,
    ) -> Result<Vec<GeographicalFactor>>;
}

#[async_trait]
pub trait FactorServiceTrait: Send + Sync {
    async fn resolve_factor(&self, query: &FactorQuery) -> Result<FactorOutcome>;
}
