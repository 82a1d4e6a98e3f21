use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::valuation_calculator::calculate_valuation;
use super::valuation_model::{
    ResolvedValuationInputs, ValuationRequest, ValuationResult, ValuationTarget,
};
use super::valuation_rules::ValuationRules;
use super::valuation_traits::ValuationServiceTrait;
use crate::errors::{ResolutionError, Result};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::factors::FactorServiceTrait;
use crate::hierarchy::HierarchyServiceTrait;
use crate::history::{CalculationHistoryEntry, CalculationHistoryRepositoryTrait, RestoredCalculation};
use crate::parameters::{ParameterBand, ParameterServiceTrait};

/// Orchestrates one valuation: validation, concurrent master-data resolution,
/// the formula engine and the history.
pub struct ValuationService {
    hierarchy_service: Arc<dyn HierarchyServiceTrait>,
    factor_service: Arc<dyn FactorServiceTrait>,
    parameter_service: Arc<dyn ParameterServiceTrait>,
    history: Arc<dyn CalculationHistoryRepositoryTrait>,
    rules: ValuationRules,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ValuationService {
    pub fn new(
        hierarchy_service: Arc<dyn HierarchyServiceTrait>,
        factor_service: Arc<dyn FactorServiceTrait>,
        parameter_service: Arc<dyn ParameterServiceTrait>,
        history: Arc<dyn CalculationHistoryRepositoryTrait>,
        rules: ValuationRules,
    ) -> Self {
        Self {
            hierarchy_service,
            factor_service,
            parameter_service,
            history,
            rules,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn rules(&self) -> &ValuationRules {
        &self.rules
    }

    async fn resolve_mouza_base(&self, target: &ValuationTarget) -> Result<Decimal> {
        let mouzas = self
            .hierarchy_service
            .get_mouzas(Some(&target.district_code), Some(&target.circle_code))
            .await?;
        let mouza = mouzas
            .into_iter()
            .find(|m| m.code == target.mouza_code)
            .ok_or_else(|| ResolutionError::NotFound {
                what: "Mouza".to_string(),
                code: target.mouza_code.clone(),
            })?;

        mouza.base_price_mouza.ok_or_else(|| {
            ResolutionError::NotFound {
                what: "Base price of mouza".to_string(),
                code: target.mouza_code.clone(),
            }
            .into()
        })
    }

    async fn resolve_lot_percent(&self, target: &ValuationTarget) -> Result<Decimal> {
        let lots = self
            .hierarchy_service
            .get_lots(Some(&target.district_code), Some(&target.circle_code))
            .await?;
        let lot = lots
            .into_iter()
            .find(|l| l.code == target.lot_code)
            .ok_or_else(|| ResolutionError::NotFound {
                what: "Lot".to_string(),
                code: target.lot_code.clone(),
            })?;

        Ok(lot.base_price_increase_lot.unwrap_or(Decimal::ZERO))
    }

    async fn resolve_land_use_percent(&self, target: &ValuationTarget) -> Result<Decimal> {
        let category_id = target.land_use.category_id();
        let categories = self.hierarchy_service.get_land_categories().await?;
        categories
            .into_iter()
            .find(|c| c.id == category_id)
            .map(|c| c.base_price_mouza_increase)
            .ok_or_else(|| {
                ResolutionError::NotFound {
                    what: "Land category".to_string(),
                    code: category_id.to_string(),
                }
                .into()
            })
    }

    async fn resolve_bands(&self, target: &ValuationTarget) -> Result<Vec<ParameterBand>> {
        if target.band_selections.is_empty() {
            return Ok(Vec::new());
        }
        let catalog = self.parameter_service.load_catalog().await?;
        catalog.resolve_selections(&target.band_selections)
    }

    async fn evaluate(&self, request: &ValuationRequest) -> Result<ValuationResult> {
        let inputs = self.resolve_inputs(request).await?;
        calculate_valuation(&inputs, &self.rules)
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn resolve_inputs(&self, request: &ValuationRequest) -> Result<ResolvedValuationInputs> {
        let target = request.validate()?;
        let factor_query = target.factor_query();

        let (mouza_base, lot_adjustment_percent, land_use_adjustment_percent, factor, bands) = futures::try_join!(
            self.resolve_mouza_base(&target),
            self.resolve_lot_percent(&target),
            self.resolve_land_use_percent(&target),
            self.factor_service.resolve_factor(&factor_query),
            self.resolve_bands(&target),
        )?;

        debug!(
            "Resolved inputs for mouza {}: base {}, lot {}%, land use {}%, factor {:?}, {} bands",
            target.mouza_code,
            mouza_base,
            lot_adjustment_percent,
            land_use_adjustment_percent,
            factor,
            bands.len()
        );

        Ok(ResolvedValuationInputs {
            mouza_base,
            lot_adjustment_percent,
            land_use: target.land_use,
            land_use_adjustment_percent,
            factor,
            bands,
            attributes: target.attributes,
            area_type: target.area_type,
            total_lessa: target.total_lessa,
        })
    }

    async fn compute_valuation(&self, request: &ValuationRequest) -> Result<ValuationResult> {
        let result = self.evaluate(request).await?;
        let entry = self.history.record(request.clone(), result.clone())?;

        self.event_sink.emit(DomainEvent::valuation_computed(
            entry.id,
            request.mouza_code.clone().unwrap_or_default(),
            result.total_value,
        ));
        Ok(result)
    }

    async fn compute_unit_valuation(&self, request: &ValuationRequest) -> Result<ValuationResult> {
        self.evaluate(&request.with_unit_area()).await
    }

    fn record_history(
        &self,
        request: ValuationRequest,
        result: ValuationResult,
    ) -> Result<CalculationHistoryEntry> {
        self.history.record(request, result)
    }

    fn list_history(&self) -> Result<Vec<CalculationHistoryEntry>> {
        self.history.list()
    }

    fn restore_history(&self, id: &str) -> Result<RestoredCalculation> {
        let entry = self.history.get(id).map_err(|e| {
            warn!("Cannot restore history entry {}: {}", id, e);
            e
        })?;
        self.event_sink
            .emit(DomainEvent::history_restored(entry.id.clone()));
        Ok(RestoredCalculation::from(entry))
    }
}
