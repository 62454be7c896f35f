// textkit - Configuration-driven text processing toolkit
//
// This is the library crate containing the string utilities, validation
// helpers, configuration store, and processing services. The binary crate
// (main.rs) provides a small demo walking through the public surface.

pub mod config;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod text;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigStore, SharedConfig};
pub use core::{Core, CoreError};
pub use metrics::ProcessingMetrics;
pub use models::{ProcessingMode, ProcessingResult};
pub use services::{DataProcessor, PipelineModule};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
