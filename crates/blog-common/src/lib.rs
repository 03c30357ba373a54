//! # blog-common
//!
//! Shared utilities including configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, MaintenanceConfig,
};
pub use telemetry::{init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig};
