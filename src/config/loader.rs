//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::FestivalMatch;
use crate::domain::value_objects::{OtpCode, SortKey};
use crate::error::{PujanError, PujanResult};

use super::types::{Config, Verbosity};

/// Project config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".pujan/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PujanResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PujanError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config).map_err(|message| PujanError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

fn validate(config: &Config) -> Result<(), String> {
    let ceiling = config.listing.price_ceiling;
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(format!("listing.price_ceiling must be positive (got {ceiling})"));
    }
    if let Some(code) = &config.auth.expected_code {
        OtpCode::parse(code).map_err(|e| format!("auth.expected_code: {e}"))?;
    }
    Ok(())
}

pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG)
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pujan").join("config.toml"))
}

fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    project_root
        .map(project_config_path)
        .filter(|p| p.is_file())
        .or_else(|| user_config_path().filter(|p| p.is_file()))
}

pub fn resolve(
    project_root: Option<&Path>,
    explicit: Option<&Path>,
) -> PujanResult<(Config, Vec<ConfigWarning>)> {
    let path = explicit.map(Path::to_path_buf).or_else(|| discover(project_root));
    let (config, warnings) = match path {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let config = discover(project_root)
        .and_then(|path| load_with_warnings(&path).ok())
        .map(|(config, _)| config)
        .unwrap_or_default();
    with_env_overrides(config)
}

/// Apply environment variable overrides (PUJAN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`.
///
/// Values that fail to parse are ignored.
pub fn apply_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(path) = get_env("PUJAN_CATALOG").filter(|p| !p.trim().is_empty()) {
        config.catalog.path = Some(PathBuf::from(path));
    }

    if let Some(sort) = get_env("PUJAN_SORT").and_then(|s| s.parse::<SortKey>().ok()) {
        config.listing.default_sort = sort;
    }

    if let Some(ceiling) = get_env("PUJAN_PRICE_CEILING")
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|c| c.is_finite() && *c > 0.0)
    {
        config.listing.price_ceiling = ceiling;
    }

    if let Some(mode) = get_env("PUJAN_FESTIVAL_MATCH") {
        match mode.trim().to_lowercase().as_str() {
            "promo-tag" | "tag" => config.listing.festival_match = FestivalMatch::PromoTag,
            "festival-list" | "list" => config.listing.festival_match = FestivalMatch::FestivalList,
            _ => {}
        }
    }

    if let Some(verbosity) = get_env("PUJAN_VERBOSITY").and_then(|v| Verbosity::from_name(&v)) {
        config.output.verbosity = verbosity;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "catalog",
        "path",
        "listing",
        "default_sort",
        "price_ceiling",
        "festival_match",
        "auth",
        "simulated_latency_ms",
        "expected_code",
        "output",
        "verbosity",
        "color",
    ];

    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut curr = Vec::with_capacity(b.len() + 1);
        curr.push(i + 1);
        for (j, bc) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ac != *bc);
            curr.push(substitute.min(prev[j + 1] + 1).min(curr[j] + 1));
        }
        prev = curr;
    }

    prev[b.len()]
}
