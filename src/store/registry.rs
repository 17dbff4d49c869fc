use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NrmError;
use crate::model::{RegistryEntry, RegistrySet, normalize_url};

/// Registries shipped with the binary, in display order.
const DEFAULT_REGISTRIES: &str = include_str!("../registries.json");

pub const CUSTOM_FILE: &str = "registries.json";

/// The user-maintained registry list, persisted as JSON in the config directory.
/// Only custom entries live on disk; the bundled defaults are overlaid at load time.
pub struct RegistryStore {
    path: PathBuf,
    custom: RegistrySet,
}

impl RegistryStore {
    /// Open the custom store in `config_dir`. A missing file is an empty store.
    pub fn open(config_dir: &Path) -> Result<Self, NrmError> {
        let path = config_dir.join(CUSTOM_FILE);
        let custom = load_custom(&path)?;
        Ok(Self { path, custom })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn custom(&self) -> &RegistrySet {
        &self.custom
    }

    /// Defaults overlaid with custom entries.
    pub fn load(&self) -> Result<RegistrySet, NrmError> {
        Ok(merge(default_registries()?, &self.custom))
    }

    /// Insert or overwrite a custom entry and rewrite the store file.
    pub fn add(
        &mut self,
        name: &str,
        url: &str,
        home: Option<&str>,
    ) -> Result<RegistryEntry, NrmError> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() {
            return Err(NrmError::MissingArgument("registry"));
        }
        if url.is_empty() {
            return Err(NrmError::MissingArgument("url"));
        }

        let home = home
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string);
        let entry = RegistryEntry::new(normalize_url(url), home);

        self.custom.insert(name.to_string(), entry.clone());
        self.save()?;
        Ok(entry)
    }

    /// Delete a custom entry. Absent names leave the file untouched.
    pub fn remove(&mut self, name: &str) -> Result<Option<RegistryEntry>, NrmError> {
        let Some(entry) = self.custom.shift_remove(name) else {
            tracing::debug!(name, "not a custom registry, nothing to remove");
            return Ok(None);
        };
        self.save()?;
        Ok(Some(entry))
    }

    fn save(&self) -> Result<(), NrmError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| NrmError::DirCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(&self.custom)?;
        fs::write(&self.path, content).map_err(|source| NrmError::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "saved custom registries");
        Ok(())
    }
}

pub fn default_registries() -> Result<RegistrySet, NrmError> {
    serde_json::from_str(DEFAULT_REGISTRIES).map_err(|source| NrmError::StoreParse {
        path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/src/registries.json")),
        source,
    })
}

/// Custom entries replace defaults of the same name wholesale.
pub fn merge(mut defaults: RegistrySet, custom: &RegistrySet) -> RegistrySet {
    for (name, entry) in custom {
        defaults.insert(name.clone(), entry.clone());
    }
    defaults
}

fn load_custom(path: &Path) -> Result<RegistrySet, NrmError> {
    if !path.exists() {
        return Ok(RegistrySet::new());
    }
    let content = fs::read_to_string(path).map_err(|source| NrmError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| NrmError::StoreParse {
        path: path.to_path_buf(),
        source,
    })
}
