//! Layered tool settings.
//!
//! Settings are read from an optional config file and then from
//! `BUCKETCHART_*` environment variables, later layers winning. Nested keys
//! use a double underscore:
//!
//! ```bash
//! BUCKETCHART_CHART=pie
//! BUCKETCHART_PROJECTION__AXIS_CHECK=off
//! BUCKETCHART_PROJECTION__SUPPORTS_MULTIPLE_METRICS=true
//! ```
//!
//! Command-line flags are applied on top by the binary.

use std::path::Path;

use bucketchart_projectors::{ChartKind, ProjectorConfig};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BUCKETCHART";

/// Settings for projecting saved responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Options passed to every projector.
    pub projection: ProjectorConfig,

    /// Chart to project for when none is given on the command line.
    pub chart: Option<ChartKind>,

    /// Pretty-print the emitted JSON.
    pub pretty: bool,

    /// Poll interval in seconds for watch mode.
    pub refresh_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            projection: ProjectorConfig::default(),
            chart: None,
            pretty: false,
            refresh_secs: 1,
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus the environment.
    ///
    /// A file that is named but missing is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
