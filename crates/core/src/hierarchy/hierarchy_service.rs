use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::hierarchy_model::{
    Circle, District, HierarchyLevel, HierarchyOption, LandCategory, Lot, Mouza, SelectedCodes,
    Village,
};
use super::hierarchy_selection::{HierarchySelection, LoadOutcome};
use super::hierarchy_traits::{HierarchyServiceTrait, MasterDataRepositoryTrait};
use crate::errors::{Error, Result};
use crate::utils::lookup_utils::bounded_lookup;

/// Resolves the location hierarchy through the master-data collaborator.
///
/// Only active units are returned. There is no caching: every call is a fresh
/// lookup bounded by `lookup_timeout`.
#[derive(Clone)]
pub struct LocationHierarchyService {
    repository: Arc<dyn MasterDataRepositoryTrait>,
    lookup_timeout: Duration,
}

impl LocationHierarchyService {
    pub fn new(repository: Arc<dyn MasterDataRepositoryTrait>, lookup_timeout: Duration) -> Self {
        Self {
            repository,
            lookup_timeout,
        }
    }

    async fn fetch_options(
        &self,
        level: HierarchyLevel,
        parents: &SelectedCodes,
    ) -> Result<Vec<HierarchyOption>> {
        let district = parents.district_code.as_deref();
        let circle = parents.circle_code.as_deref();

        let options = match level {
            HierarchyLevel::District => self
                .get_districts()
                .await?
                .iter()
                .map(HierarchyOption::from)
                .collect(),
            HierarchyLevel::Circle => self
                .get_circles(district)
                .await?
                .iter()
                .map(HierarchyOption::from)
                .collect(),
            HierarchyLevel::Mouza => self
                .get_mouzas(district, circle)
                .await?
                .iter()
                .map(HierarchyOption::from)
                .collect(),
            HierarchyLevel::Lot => self
                .get_lots(district, circle)
                .await?
                .iter()
                .map(HierarchyOption::from)
                .collect(),
            HierarchyLevel::Village => self
                .get_villages(
                    district,
                    circle,
                    parents.mouza_code.as_deref(),
                    parents.lot_code.as_deref(),
                )
                .await?
                .iter()
                .map(HierarchyOption::from)
                .collect(),
        };
        Ok(options)
    }
}

#[async_trait]
impl HierarchyServiceTrait for LocationHierarchyService {
    async fn get_districts(&self) -> Result<Vec<District>> {
        let districts =
            bounded_lookup("districts", self.lookup_timeout, self.repository.list_districts())
                .await?;
        Ok(districts.into_iter().filter(|d| d.is_active).collect())
    }

    async fn get_circles(&self, district_code: Option<&str>) -> Result<Vec<Circle>> {
        let Some(district_code) = district_code else {
            return Ok(Vec::new());
        };
        let circles = bounded_lookup(
            "circles",
            self.lookup_timeout,
            self.repository.list_circles(district_code),
        )
        .await?;
        Ok(circles.into_iter().filter(|c| c.is_active).collect())
    }

    async fn get_mouzas(
        &self,
        district_code: Option<&str>,
        circle_code: Option<&str>,
    ) -> Result<Vec<Mouza>> {
        let (Some(district_code), Some(circle_code)) = (district_code, circle_code) else {
            return Ok(Vec::new());
        };
        let mouzas = bounded_lookup(
            "mouzas",
            self.lookup_timeout,
            self.repository.list_mouzas(district_code, circle_code),
        )
        .await?;
        Ok(mouzas.into_iter().filter(|m| m.is_active).collect())
    }

    async fn get_lots(
        &self,
        district_code: Option<&str>,
        circle_code: Option<&str>,
    ) -> Result<Vec<Lot>> {
        let (Some(district_code), Some(circle_code)) = (district_code, circle_code) else {
            return Ok(Vec::new());
        };
        let lots = bounded_lookup(
            "lots",
            self.lookup_timeout,
            self.repository.list_lots(district_code, circle_code),
        )
        .await?;
        Ok(lots.into_iter().filter(|l| l.is_active).collect())
    }

    async fn get_villages(
        &self,
        district_code: Option<&str>,
        circle_code: Option<&str>,
        mouza_code: Option<&str>,
        lot_code: Option<&str>,
    ) -> Result<Vec<Village>> {
        let (Some(district_code), Some(circle_code), Some(mouza_code)) =
            (district_code, circle_code, mouza_code)
        else {
            return Ok(Vec::new());
        };
        let villages = bounded_lookup(
            "villages",
            self.lookup_timeout,
            self.repository
                .list_villages(district_code, circle_code, mouza_code, lot_code),
        )
        .await?;
        Ok(villages.into_iter().filter(|v| v.is_active).collect())
    }

    async fn get_land_categories(&self) -> Result<Vec<LandCategory>> {
        let categories = bounded_lookup(
            "land categories",
            self.lookup_timeout,
            self.repository.list_land_categories(),
        )
        .await?;
        Ok(categories.into_iter().filter(|c| c.is_active).collect())
    }

    async fn refresh_options(
        &self,
        selection: &Mutex<HierarchySelection>,
        level: HierarchyLevel,
    ) -> Result<LoadOutcome> {
        let ticket = {
            let mut guard = selection
                .lock()
                .map_err(|e| Error::Unexpected(format!("Selection lock poisoned: {}", e)))?;
            guard.begin_load(level)
        };
        debug!(
            "Loading {} options (ticket {})",
            level.as_str(),
            ticket.sequence
        );

        let response = match self.fetch_options(level, &ticket.parents).await {
            Ok(options) => Ok(options),
            Err(Error::Resolution(e)) => Err(e),
            Err(e) => return Err(e),
        };
        let failure = response.as_ref().err().cloned();

        let outcome = {
            let mut guard = selection
                .lock()
                .map_err(|e| Error::Unexpected(format!("Selection lock poisoned: {}", e)))?;
            guard.complete_load(&ticket, response)
        };

        // A superseded failure is irrelevant; a current one is surfaced for retry.
        match (outcome, failure) {
            (LoadOutcome::Applied, Some(e)) => Err(e.into()),
            (outcome, _) => Ok(outcome),
        }
    }
}
