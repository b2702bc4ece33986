//! Configuration loading and validation.
//!
//! Configuration is YAML, layered from lowest to highest priority:
//!
//! 1. User global config (`~/.roofline/config.yml`)
//! 2. Project config (`.roofline/config.yml`)
//! 3. An explicit `--config` file
//! 4. Environment variables (`ROOFLINE_API_URL`, `ROOFLINE_TOKEN`,
//!    `ROOFLINE_DATA_DIR`)
//!
//! # Example
//!
//! ```
//! use roofline::config::{parse_config, RooflineConfig};
//! use std::path::Path;
//!
//! let config = parse_config("compare:\n  limit: 3\n", Path::new("inline.yml")).unwrap();
//! assert_eq!(config.compare.limit, 3);
//! assert_eq!(config.api.base_url, RooflineConfig::default().api.base_url);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{apply_env_overrides, load_config, load_config_from, parse_config, ConfigPaths};
pub use schema::{ApiSettings, CompareSettings, RooflineConfig, StorageSettings};
