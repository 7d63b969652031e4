//! Analyzer configuration (YAML, host-owned)

pub mod analyzer_config;
pub mod error;

pub use analyzer_config::{AnalyzerConfig, ColorPalette, SUPPORTED_VERSIONS};
pub use error::{ConfigError, ConfigResult};
