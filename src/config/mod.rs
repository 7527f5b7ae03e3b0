//! Configuration module for pujan
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (PUJAN_*)
//! 3. Project config (.pujan/config.toml)
//! 4. User config (<config dir>/pujan/config.toml)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, project_config_path, user_config_path, ConfigWarning, PROJECT_CONFIG,
};
pub use types::{AuthConfig, CatalogConfig, ColorMode, Config, ListingConfig, OutputConfig, Verbosity};
