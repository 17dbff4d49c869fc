pub mod config;
pub mod registry;

pub use config::{GlobalConfig, PackageManager};
pub use registry::{RegistryEntry, RegistrySet, normalize_url};
