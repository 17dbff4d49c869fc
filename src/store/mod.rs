pub mod config;
pub mod npmrc;
pub mod registry;

pub use config::{default_config_dir, load_config, save_config};
pub use npmrc::write_local_registry;
pub use registry::RegistryStore;
