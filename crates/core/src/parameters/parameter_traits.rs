use async_trait::async_trait;

use super::band_selector::ParameterCatalog;
use super::parameter_model::{Parameter, ParameterBand};
use crate::errors::Result;

/// Read-only parameter/band catalog collaborator.
#[async_trait]
pub trait ParameterRepositoryTrait: Send + Sync {
    async fn list_parameters(&self) -> Result<Vec<Parameter>>;

    async fn list_bands(&self) -> Result<Vec<ParameterBand>>;
}

#[async_trait]
pub trait ParameterServiceTrait: Send + Sync {
    /// Fetches and validates the current catalog.
    async fn load_catalog(&self) -> Result<ParameterCatalog>;

    /// Candidate bands of one category, sorted ascending by minimum range.
    async fn get_bands(&self, category: &str) -> Result<Vec<ParameterBand>>;
}
