use std::path::{Path, PathBuf};

use crate::error::NrmError;
use crate::model::{GlobalConfig, PackageManager, RegistryEntry, RegistrySet, normalize_url};
use crate::pm;
use crate::store::{self, RegistryStore};

/// The registry the package manager currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Current {
    /// Matches a known registry name.
    Known { name: String, url: String },
    /// Not in the registry list; the raw configured URL.
    Unknown(String),
}

impl Current {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Known { name, .. } => Some(name),
            Self::Unknown(_) => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Known { url, .. } => url,
            Self::Unknown(url) => url,
        }
    }
}

/// Everything a command needs, built once at startup.
pub struct Context {
    config_dir: PathBuf,
    config: GlobalConfig,
    store: RegistryStore,
    registries: RegistrySet,
}

impl Context {
    pub fn open(config_dir: Option<&Path>) -> Result<Self, NrmError> {
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => store::default_config_dir()?,
        };

        let config = store::load_config(&config_dir)?;
        let store = RegistryStore::open(&config_dir)?;
        let registries = store.load()?;
        tracing::debug!(
            dir = %config_dir.display(),
            count = registries.len(),
            "loaded registries"
        );

        Ok(Self {
            config_dir,
            config,
            store,
            registries,
        })
    }

    /// Rebuild the merged set after the custom store changed.
    pub fn reload(&mut self) -> Result<(), NrmError> {
        self.registries = self.store.load()?;
        Ok(())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GlobalConfig {
        &mut self.config
    }

    pub fn save_config(&self) -> Result<(), NrmError> {
        store::save_config(&self.config_dir, &self.config)
    }

    pub fn package_manager(&self) -> PackageManager {
        self.config.package_manager
    }

    pub fn store(&self) -> &RegistryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RegistryStore {
        &mut self.store
    }

    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    pub fn get(&self, name: &str) -> Result<&RegistryEntry, NrmError> {
        self.registries
            .get(name)
            .ok_or_else(|| NrmError::UnknownRegistry {
                name: name.to_string(),
            })
    }

    /// Ask the package manager for its registry and map it back to a name.
    pub fn current(&self) -> Result<Current, NrmError> {
        let url = pm::get_registry(self.package_manager())?;
        Ok(resolve_current(&self.registries, &url))
    }
}

/// First registry (in set order) whose URL matches `url`, ignoring a trailing slash.
pub fn resolve_current(registries: &RegistrySet, url: &str) -> Current {
    let wanted = normalize_url(url);
    registries
        .iter()
        .find(|(_, entry)| normalize_url(&entry.registry) == wanted)
        .map(|(name, entry)| Current::Known {
            name: name.clone(),
            url: entry.registry.clone(),
        })
        .unwrap_or_else(|| Current::Unknown(url.to_string()))
}
