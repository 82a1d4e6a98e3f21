//! JSON-file master data store.
//!
//! Loads the administrative hierarchy, land categories, geographical factors
//! and the parameter catalog from one JSON document and serves them through
//! the core repository traits.

use std::path::Path;

use async_trait::async_trait;
use landval_core::errors::{Error, Result};
use landval_core::factors::{FactorRepositoryTrait, GeographicalFactor};
use landval_core::hierarchy::{
    Circle, District, LandCategory, Lot, MasterDataRepositoryTrait, Mouza, Village,
};
use landval_core::parameters::{Parameter, ParameterBand, ParameterRepositoryTrait};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterDataSnapshot {
    pub districts: Vec<District>,
    pub circles: Vec<Circle>,
    pub mouzas: Vec<Mouza>,
    pub lots: Vec<Lot>,
    pub villages: Vec<Village>,
    pub land_categories: Vec<LandCategory>,
    pub geographical_factors: Vec<GeographicalFactor>,
    pub parameters: Vec<Parameter>,
    pub parameter_bands: Vec<ParameterBand>,
}

pub struct JsonMasterDataStore {
    data: MasterDataSnapshot,
}

impl JsonMasterDataStore {
    pub fn new(data: MasterDataSnapshot) -> Self {
        Self { data }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let data: MasterDataSnapshot = serde_json::from_str(json)
            .map_err(|e| Error::Repository(format!("Invalid master data: {}", e)))?;
        Ok(Self::new(data))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Repository(format!(
                "Cannot read master data from {}: {}",
                path.display(),
                e
            ))
        })?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            "Loaded master data from {}: {} districts, {} mouzas, {} factors, {} bands",
            path.display(),
            store.data.districts.len(),
            store.data.mouzas.len(),
            store.data.geographical_factors.len(),
            store.data.parameter_bands.len()
        );
        Ok(store)
    }
}

#[async_trait]
impl MasterDataRepositoryTrait for JsonMasterDataStore {
    async fn list_districts(&self) -> Result<Vec<District>> {
        Ok(self.data.districts.clone())
    }

    async fn list_circles(&self, district_code: &str) -> Result<Vec<Circle>> {
        Ok(self
            .data
            .circles
            .iter()
            .filter(|c| c.district_code == district_code)
            .cloned()
            .collect())
    }

    async fn list_mouzas(&self, district_code: &str, circle_code: &str) -> Result<Vec<Mouza>> {
        Ok(self
            .data
            .mouzas
            .iter()
            .filter(|m| m.district_code == district_code && m.circle_code == circle_code)
            .cloned()
            .collect())
    }

    async fn list_lots(&self, district_code: &str, circle_code: &str) -> Result<Vec<Lot>> {
        Ok(self
            .data
            .lots
            .iter()
            .filter(|l| l.district_code == district_code && l.circle_code == circle_code)
            .cloned()
            .collect())
    }

    async fn list_villages(
        &self,
        district_code: &str,
        circle_code: &str,
        mouza_code: &str,
        lot_code: Option<&str>,
    ) -> Result<Vec<Village>> {
        Ok(self
            .data
            .villages
            .iter()
            .filter(|v| {
                v.district_code == district_code
                    && v.circle_code == circle_code
                    && v.mouza_code == mouza_code
                    && lot_code.map_or(true, |lot| v.lot_code.as_deref() == Some(lot))
            })
            .cloned()
            .collect())
    }

    async fn list_land_categories(&self) -> Result<Vec<LandCategory>> {
        Ok(self.data.land_categories.clone())
    }
}

#[async_trait]
impl FactorRepositoryTrait for JsonMasterDataStore {
    async fn find_factor_for_daag(
        &self,
        district_code: &str,
        circle_code: &str,
        lot_code: &str,
        daag_number: &str,
    ) -> Result<Option<GeographicalFactor>> {
        Ok(self
            .data
            .geographical_factors
            .iter()
            .find(|f| {
                f.district_code == district_code
                    && f.circle_code == circle_code
                    && f.lot_code == lot_code
                    && f.daag_number.as_deref().map(str::trim) == Some(daag_number)
            })
            .cloned())
    }

    async fn list_factors_in_scope(
        &self,
        district_code: &str,
        circle_code: &str,
        lot_code: &str,
    ) -> Result<Vec<GeographicalFactor>> {
        Ok(self
            .data
            .geographical_factors
            .iter()
            .filter(|f| {
                f.district_code == district_code
                    && f.circle_code == circle_code
                    && f.lot_code == lot_code
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ParameterRepositoryTrait for JsonMasterDataStore {
    async fn list_parameters(&self) -> Result<Vec<Parameter>> {
        Ok(self.data.parameters.clone())
    }

    async fn list_bands(&self) -> Result<Vec<ParameterBand>> {
        Ok(self.data.parameter_bands.clone())
    }
}
