//! Transit configuration loading from `.transitrc.toml`.
//!
//! Configuration is optional: every section has defaults, and a file that
//! cannot be read or parsed is reported as a warning and ignored.
//! Command-line flags always take precedence over these values.
//!
//! # Example Configuration
//!
//! ```toml
//! [network]
//! file = "networks/kyiv.toml"
//!
//! [output]
//! format = "json"
//! color = false
//!
//! [routes]
//! max_targets = 5
//! parallel = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".transitrc.toml";

/// Root configuration structure loaded from `.transitrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct TransitConfig {
    /// Which network definition to load.
    #[serde(default)]
    pub network: NetworkSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Defaults for the `routes` command.
    #[serde(default)]
    pub routes: RoutesSettings,
}

/// Network source selection.
#[derive(Debug, Deserialize, Default)]
pub struct NetworkSettings {
    /// Path to a TOML/JSON network definition, relative to the config file.
    ///
    /// Default: the built-in Kyiv metro network.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Output formatting preferences.
///
/// Note: this is distinct from the runtime `OutputConfig` in the output
/// module, which handles actual rendering.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Defaults to TTY detection.
    #[serde(default)]
    pub color: Option<bool>,
}

/// Defaults for the all-pairs route listing.
#[derive(Debug, Deserialize, Default)]
pub struct RoutesSettings {
    /// Limit the number of targets printed per source.
    #[serde(default)]
    pub max_targets: Option<usize>,

    /// Compute all pairs on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl TransitConfig {
    /// Load configuration from `.transitrc.toml` in the given directory.
    ///
    /// Returns defaults if the file is missing or invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str::<TransitConfig>(&content) {
                    Ok(mut config) => {
                        config.resolve_paths(root);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    fn resolve_paths(&mut self, root: &Path) {
        if let Some(file) = &self.network.file {
            if file.is_relative() {
                self.network.file = Some(root.join(file));
            }
        }
    }

    /// Configured network file, if any.
    pub fn network_file(&self) -> Option<&Path> {
        self.network.file.as_deref()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured colour override, or `None` for auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn max_targets(&self) -> Option<usize> {
        self.routes.max_targets
    }

    pub fn parallel_routes(&self) -> bool {
        self.routes.parallel
    }
}
