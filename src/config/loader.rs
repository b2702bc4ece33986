//! Configuration file discovery and loading.
//!
//! Files are read as raw YAML, deep-merged in priority order, then
//! deserialized once so a later file can override a single nested key.

use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::RooflineConfig;
use crate::error::{Result, RooflineError};

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.roofline/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .roofline/config.yml
    pub project: Option<PathBuf>,

    /// Config passed with `--config`. Must exist when set.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Find user's global config at ~/.roofline/config.yml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".roofline").join("config.yml");
        path.exists().then_some(path)
    }

    /// Find project config at .roofline/config.yml
    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(".roofline").join("config.yml");
        path.exists().then_some(path)
    }

    /// All configured paths in merge order.
    pub fn in_order(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load, merge, override from the process environment, and validate.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<RooflineConfig> {
    let paths = ConfigPaths::discover(project_root, explicit);
    load_config_from(&paths, |key| std::env::var(key).ok())
}

/// Load from known paths with an explicit environment lookup.
///
/// # Errors
///
/// Returns `ConfigNotFound` if a listed file is missing.
/// Returns `ConfigParseError` if any file is invalid YAML or has bad types.
/// Returns `ConfigValidationError` if the merged result is unusable.
pub fn load_config_from(
    paths: &ConfigPaths,
    env: impl Fn(&str) -> Option<String>,
) -> Result<RooflineConfig> {
    let mut merged = Value::Mapping(Default::default());
    let mut last_path = PathBuf::from("<defaults>");

    for path in paths.in_order() {
        tracing::debug!("Loading config from {}", path.display());
        let value = load_config_value(path)?;
        merged = deep_merge(&merged, &value);
        last_path = path.clone();
    }

    let mut config: RooflineConfig =
        serde_yaml::from_value(merged).map_err(|e| RooflineError::ConfigParseError {
            path: last_path,
            message: e.to_string(),
        })?;

    apply_env_overrides(&mut config, env);
    config.validate()?;

    Ok(config)
}

/// Parse YAML content into a config.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RooflineConfig> {
    if content.trim().is_empty() {
        return Ok(RooflineConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| RooflineError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Override config values from `ROOFLINE_*` environment variables.
///
/// Empty variables are ignored.
pub fn apply_env_overrides(config: &mut RooflineConfig, env: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = lookup("ROOFLINE_API_URL") {
        config.api.base_url = url;
    }
    if let Some(token) = lookup("ROOFLINE_TOKEN") {
        config.api.token = Some(token);
    }
    if let Some(dir) = lookup("ROOFLINE_DATA_DIR") {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }
}

fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RooflineError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RooflineError::Io(e)
        }
    })?;

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| RooflineError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses as null; treat it as "nothing to override".
    Ok(if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    })
}

/// Recursively merge mappings; anything else in `overlay` replaces `base`.
fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();
            for (key, value) in overlay_map {
                let merged = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                result.insert(key.clone(), merged);
            }
            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}
