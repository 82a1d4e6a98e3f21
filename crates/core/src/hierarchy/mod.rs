//! Location hierarchy module - administrative master data, lookups and the
//! cascading selection state used by the valuation form.

mod hierarchy_model;
mod hierarchy_selection;
mod hierarchy_service;
mod hierarchy_traits;

pub use hierarchy_model::*;
pub use hierarchy_selection::{HierarchySelection, LevelState, LoadOutcome, LookupTicket};
pub use hierarchy_service::LocationHierarchyService;
pub use hierarchy_traits::{HierarchyServiceTrait, MasterDataRepositoryTrait};

#[cfg(test)]
mod hierarchy_service_tests;
