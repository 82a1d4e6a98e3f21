use std::sync::Arc;

use anyhow::Context;
use landval_core::{
    events::DomainEventSink,
    factors::{FactorService, FactorServiceTrait},
    hierarchy::{HierarchyServiceTrait, LocationHierarchyService},
    history::InMemoryHistoryStore,
    parameters::{ParameterService, ParameterServiceTrait},
    valuation::{ValuationRules, ValuationService, ValuationServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, domain_events::WebDomainEventSink, master_data::JsonMasterDataStore};

pub struct AppState {
    pub hierarchy_service: Arc<dyn HierarchyServiceTrait>,
    pub factor_service: Arc<dyn FactorServiceTrait>,
    pub parameter_service: Arc<dyn ParameterServiceTrait>,
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("LV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

async fn load_rules(config: &Config) -> anyhow::Result<ValuationRules> {
    let Some(path) = config.rules_path.as_deref() else {
        return Ok(ValuationRules::default());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read valuation rules from {}", path))?;
    let rules: ValuationRules = serde_json::from_str(&json)
        .with_context(|| format!("Invalid valuation rules in {}", path))?;
    rules
        .validate()
        .with_context(|| format!("Invalid valuation rules in {}", path))?;
    tracing::info!("Valuation rules loaded from {}: {:?}", path, rules);
    Ok(rules)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Arc::new(JsonMasterDataStore::load(&config.master_data_path).await?);
    let rules = load_rules(config).await?;
    let settings = &config.engine;

    let domain_event_sink = Arc::new(WebDomainEventSink::new());
    domain_event_sink.start_worker();

    let hierarchy_service: Arc<dyn HierarchyServiceTrait> = Arc::new(
        LocationHierarchyService::new(store.clone(), settings.lookup_timeout),
    );
    let factor_service: Arc<dyn FactorServiceTrait> =
        Arc::new(FactorService::new(store.clone(), settings.lookup_timeout));
    let parameter_service: Arc<dyn ParameterServiceTrait> =
        Arc::new(ParameterService::new(store, settings.lookup_timeout));
    let history = Arc::new(InMemoryHistoryStore::new(settings.history_capacity));

    let valuation_service: Arc<dyn ValuationServiceTrait> = Arc::new(
        ValuationService::new(
            hierarchy_service.clone(),
            factor_service.clone(),
            parameter_service.clone(),
            history,
            rules,
        )
        .with_event_sink(domain_event_sink as Arc<dyn DomainEventSink>),
    );

    Ok(Arc::new(AppState {
        hierarchy_service,
        factor_service,
        parameter_service,
        valuation_service,
    }))
}
