#![cfg(unix)]

mod cli_config;
mod cli_current;
mod cli_ls;
mod cli_use;
