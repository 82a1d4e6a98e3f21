pub mod api;
pub mod config;
pub mod domain_events;
pub mod error;
pub mod master_data;
pub mod models;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
