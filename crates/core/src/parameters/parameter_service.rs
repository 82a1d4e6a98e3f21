use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::band_selector::ParameterCatalog;
use super::parameter_model::ParameterBand;
use super::parameter_traits::{ParameterRepositoryTrait, ParameterServiceTrait};
use crate::errors::Result;
use crate::utils::lookup_utils::bounded_lookup;

pub struct ParameterService {
    repository: Arc<dyn ParameterRepositoryTrait>,
    lookup_timeout: Duration,
}

impl ParameterService {
    pub fn new(repository: Arc<dyn ParameterRepositoryTrait>, lookup_timeout: Duration) -> Self {
        Self {
            repository,
            lookup_timeout,
        }
    }
}

#[async_trait]
impl ParameterServiceTrait for ParameterService {
    async fn load_catalog(&self) -> Result<ParameterCatalog> {
        let (parameters, bands) = futures::try_join!(
            bounded_lookup(
                "parameters",
                self.lookup_timeout,
                self.repository.list_parameters()
            ),
            bounded_lookup(
                "parameter bands",
                self.lookup_timeout,
                self.repository.list_bands()
            ),
        )?;
        debug!(
            "Loaded parameter catalog: {} parameters, {} bands",
            parameters.len(),
            bands.len()
        );
        ParameterCatalog::new(parameters, bands)
    }

    async fn get_bands(&self, category: &str) -> Result<Vec<ParameterBand>> {
        let catalog = self.load_catalog().await?;
        Ok(catalog.bands_for(category).to_vec())
    }
}
