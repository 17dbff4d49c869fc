use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NrmError;
use crate::model::GlobalConfig;

pub const CONFIG_FILE: &str = "config.toml";

pub fn default_config_dir() -> Result<PathBuf, NrmError> {
    dirs::config_dir()
        .map(|d| d.join("nrm"))
        .ok_or(NrmError::ConfigDirNotFound)
}

pub fn load_config(root: &Path) -> Result<GlobalConfig, NrmError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GlobalConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| NrmError::FileRead {
        path: path.clone(),
        source,
    })?;
    let config: GlobalConfig = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_config(root: &Path, config: &GlobalConfig) -> Result<(), NrmError> {
    fs::create_dir_all(root).map_err(|source| NrmError::DirCreate {
        path: root.to_path_buf(),
        source,
    })?;
    let path = root.join(CONFIG_FILE);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content).map_err(|source| NrmError::FileWrite { path, source })?;
    Ok(())
}
