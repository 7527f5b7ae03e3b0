//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::StorefrontSettings;
use crate::domain::policies::FestivalMatch;
use crate::domain::value_objects::{SortKey, DEFAULT_PRICE_CEILING};
use crate::error::PujanResult;

use super::loader::{self, ConfigWarning};

/// Where the catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the bundled seed is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Listing defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub default_sort: SortKey,

    /// Upper bound of the price slider and of the default price range
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,

    #[serde(default)]
    pub festival_match: FestivalMatch,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            price_ceiling: default_price_ceiling(),
            festival_match: FestivalMatch::default(),
        }
    }
}

fn default_price_ceiling() -> f64 {
    DEFAULT_PRICE_CEILING
}

/// Mock sign-in behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// When set, only this code verifies
    #[serde(default)]
    pub expected_code: Option<String>,
}

impl AuthConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// Output configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a level name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Default log filter directive for this level
    pub fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PujanResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PujanResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load. Otherwise the project config is tried,
    /// then the user config, then defaults. Environment overrides are applied
    /// last in every case.
    pub fn resolve(
        project_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> PujanResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(project_root, explicit)
    }

    /// Like [`Config::resolve`] without an explicit path, falling back to
    /// defaults when a discovered file is unreadable.
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PUJAN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Settings consumed by the storefront reducer
    pub fn storefront_settings(&self) -> StorefrontSettings {
        StorefrontSettings {
            price_ceiling: self.listing.price_ceiling,
            default_sort: self.listing.default_sort,
            festival_match: self.listing.festival_match,
        }
    }
}
