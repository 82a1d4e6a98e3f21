use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use landval_core::valuation::EngineSettings;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub master_data_path: String,
    /// Optional JSON file overriding the default rate table.
    pub rules_path: Option<String>,
    /// Lookup timeout, history capacity and preview debounce of the core services.
    pub engine: EngineSettings,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            master_data_path: "./data/master_data.json".into(),
            rules_path: None,
            engine: EngineSettings::default(),
            cors_allow: vec!["*".into()],
            request_timeout: Duration::from_millis(30000),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("LV_LISTEN_ADDR") {
            Ok(raw) => raw.parse().context("Invalid LV_LISTEN_ADDR")?,
            Err(_) => defaults.listen_addr,
        };
        let master_data_path =
            std::env::var("LV_MASTER_DATA_PATH").unwrap_or(defaults.master_data_path);
        let rules_path = std::env::var("LV_RULES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());
        let lookup_timeout = std::env::var("LV_LOOKUP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.engine.lookup_timeout);
        let history_capacity: usize = std::env::var("LV_HISTORY_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.engine.history_capacity);
        let preview_debounce = std::env::var("LV_PREVIEW_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.engine.preview_debounce);
        let cors_allow = std::env::var("LV_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("LV_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);

        Ok(Self {
            listen_addr,
            master_data_path,
            rules_path,
            engine: EngineSettings {
                lookup_timeout,
                history_capacity,
                preview_debounce,
            },
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
