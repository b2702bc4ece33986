//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compare::DEFAULT_COMPARE_LIMIT;
use crate::error::{Result, RooflineError};

/// Default property API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RooflineConfig {
    /// Property API connection.
    pub api: ApiSettings,

    /// Compare selection.
    pub compare: CompareSettings,

    /// Persisted client state.
    pub storage: StorageSettings,
}

/// Property API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL, e.g. `https://example.com/api`.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Bearer token sent with every request.
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

/// Compare selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareSettings {
    /// Maximum number of properties compared at once.
    pub limit: usize,
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_COMPARE_LIMIT,
        }
    }
}

/// Persisted state settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Persist favorites to disk. When false, favorites last one run.
    pub enabled: bool,

    /// Directory holding persisted slots. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            data_dir: None,
        }
    }
}

impl RooflineConfig {
    /// Check values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(RooflineError::ConfigValidationError {
                message: format!("api.base_url must start with http:// or https://, got '{}'", url),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(RooflineError::ConfigValidationError {
                message: "api.timeout_secs must be at least 1".to_string(),
            });
        }
        if self.compare.limit == 0 {
            return Err(RooflineError::ConfigValidationError {
                message: "compare.limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolved data directory for persisted slots.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::storage::default_data_dir)
    }
}
