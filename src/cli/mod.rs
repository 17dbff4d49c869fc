pub mod add;
pub mod config;
pub mod current;
pub mod home;
pub mod ls;
pub mod remove;
pub mod use_registry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "nrm",
    about = "Switch, list and benchmark npm/yarn package registries",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Override the config directory (default: ~/.config/nrm)
    #[arg(long, env = "NRM_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all registries, marking the active one
    #[command(alias = "list")]
    Ls,

    /// Switch the package manager to a registry
    Use {
        /// Name of the registry to use
        registry: Option<String>,

        /// Also write the registry into ./.npmrc
        #[arg(short, long)]
        local: bool,
    },

    /// Measure response time of registries
    Test {
        /// Only test this registry
        registry: Option<String>,

        /// Per-registry timeout in milliseconds (default from config)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Add or overwrite a custom registry
    Add {
        /// Name of the registry
        registry: String,

        /// Registry URL
        url: String,

        /// Home page of the registry
        home: Option<String>,
    },

    /// Remove a custom registry
    #[command(alias = "del")]
    Remove {
        /// Name of the custom registry to remove
        registry: String,
    },

    /// Show the active registry
    Current {
        /// Print the configured URL instead of the registry name
        #[arg(long)]
        show_url: bool,
    },

    /// Show the home page of a registry
    Home {
        /// Name of the registry
        registry: String,
    },

    /// Manage global configuration
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (package_manager, probe_timeout_ms)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key
        key: String,
    },
}
