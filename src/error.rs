use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NrmError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry file {path}")]
    StoreParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize registries: {0}")]
    StoreSerialize(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("registry '{name}' is not in the registry list; run `nrm ls` to see known registries")]
    UnknownRegistry { name: String },

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("{program} is not installed or not in PATH")]
    PackageManagerNotFound { program: String },

    #[error("`{program} {args}` failed: {stderr}")]
    PackageManagerCommand {
        program: String,
        args: String,
        stderr: String,
    },

    #[error("failed to determine config directory; set NRM_CONFIG_DIR or --config-dir")]
    ConfigDirNotFound,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
