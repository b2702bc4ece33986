//! Resolved settings shared by every command.

use std::path::Path;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::cli::args::Cli;
use crate::compare::CompareStore;
use crate::config::{load_config, RooflineConfig};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::storage::FileStorage;

/// Configuration after files, environment and CLI flags are applied.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    config: RooflineConfig,
}

impl CommandContext {
    pub fn new(config: RooflineConfig) -> Self {
        Self { config }
    }

    /// Load config for `project_root` and apply the global CLI flags.
    pub fn from_cli(project_root: &Path, cli: &Cli) -> Result<Self> {
        let mut config = load_config(project_root, cli.config.as_deref())?;

        if let Some(url) = &cli.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(dir) = &cli.data_dir {
            config.storage.data_dir = Some(dir.clone());
            config.storage.enabled = true;
        }
        config.validate()?;

        tracing::debug!("Using API at {}", config.api.base_url);
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &RooflineConfig {
        &self.config
    }

    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config.api)
    }

    /// Favorites backed by the data directory, or memory-only when
    /// storage is disabled.
    pub fn favorites(&self) -> FavoritesStore {
        if !self.config.storage.enabled {
            tracing::debug!("Storage disabled; favorites will not persist");
            return FavoritesStore::in_memory();
        }
        let dir = self.config.data_dir();
        tracing::debug!("Favorites stored in {}", dir.display());
        FavoritesStore::open(Arc::new(FileStorage::new(dir)))
    }

    /// An empty compare selection with the configured limit.
    pub fn compare_store(&self) -> CompareStore {
        CompareStore::with_limit(self.config.compare.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyRef;
    use tempfile::TempDir;

    #[test]
    fn favorites_persist_in_data_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = RooflineConfig::default();
        config.storage.data_dir = Some(temp.path().to_path_buf());
        let context = CommandContext::new(config);

        let mut store = context.favorites();
        assert!(store.is_persistent());
        store.toggle(PropertyRef::new("p1"));

        assert!(context.favorites().is_favorited("p1"));
        assert!(temp.path().join("favorites.json").exists());
    }

    #[test]
    fn disabled_storage_is_memory_only() {
        let mut config = RooflineConfig::default();
        config.storage.enabled = false;
        let context = CommandContext::new(config);
        assert!(!context.favorites().is_persistent());
    }

    #[test]
    fn compare_store_uses_configured_limit() {
        let mut config = RooflineConfig::default();
        config.compare.limit = 2;
        let context = CommandContext::new(config);
        assert_eq!(context.compare_store().limit(), 2);
    }
}
