use std::sync::Mutex;

use async_trait::async_trait;

use super::hierarchy_model::{Circle, District, HierarchyLevel, LandCategory, Lot, Mouza, Village};
use super::hierarchy_selection::{HierarchySelection, LoadOutcome};
use crate::errors::Result;

/// Read-only master-data collaborator.
///
/// Each call is an independent request/response and may fail on its own
/// (timeout, server error). Implementations return an empty list when the
/// parent has no children; they never filter on `is_active`.
#[async_trait]
pub trait MasterDataRepositoryTrait: Send + Sync {
    async fn list_districts(&self) -> Result<Vec<District>>;

    async fn list_circles(&self, district_code: &str) -> Result<Vec<Circle>>;

    async fn list_mouzas(&self, district_code: &str, circle_code: &str) -> Result<Vec<Mouza>>;

    async fn list_lots(&self, district_code: &str, circle_code: &str) -> Result<Vec<Lot>>;

    async fn list_villages(
        &self,
        district_code: &str,
        circle_code: &str,
        mouza_code: &str,
        lot_code: Option<&str>,
    ) -> Result<Vec<Village>>;

    async fn list_land_categories(&self) -> Result<Vec<LandCategory>>;
}

/// Location hierarchy lookups as seen by the form.
///
/// Missing parent codes yield an empty list instead of an error.
#[async_trait]
pub trait HierarchyServiceTrait: Send + Sync {
    async fn get_districts(&self) -> Result<Vec<District>>;

    async fn get_circles(&self, district_code: Option<&str>) -> Result<Vec<Circle>>;

    async fn get_mouzas(
        &self,
        district_code: Option<&str>,
        circle_code: Option<&str>,
    ) -> Result<Vec<Mouza>>;

    async fn get_lots(
        &self,
        district_code: Option<&str>,
        circle_code: Option<&str>,
    ) -> Result<Vec<Lot>>;

    async fn get_villages(
        &self,
        district_code: Option<&str>,
        circle_code: Option<&str>,
        mouza_code: Option<&str>,
        lot_code: Option<&str>,
    ) -> Result<Vec<Village>>;

    async fn get_land_categories(&self) -> Result<Vec<LandCategory>>;

    /// Reloads the options of `level` from the current parent selections.
    ///
    /// The lock is released while the lookup is in flight. If the selection
    /// changed in the meantime the response is discarded.
    async fn refresh_options(
        &self,
        selection: &Mutex<HierarchySelection>,
        level: HierarchyLevel,
    ) -> Result<LoadOutcome>;
}
