use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod context;
mod display;
mod error;
mod model;
mod pm;
mod probe;
mod store;

use context::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose { "nrm=debug" } else { "nrm=info" })
        }))
        .init();

    let mut ctx =
        Context::open(cli.config_dir.as_deref()).context("failed to load registry list")?;

    match cli.command {
        cli::Command::Ls => cli::ls::run(&ctx),
        cli::Command::Use { registry, local } => cli::use_registry::run(&ctx, registry, local),
        cli::Command::Test { registry, timeout } => cli::test::run(&ctx, registry, timeout).await,
        cli::Command::Add {
            registry,
            url,
            home,
        } => cli::add::run(&mut ctx, registry, url, home),
        cli::Command::Remove { registry } => cli::remove::run(&mut ctx, registry),
        cli::Command::Current { show_url } => cli::current::run(&ctx, show_url),
        cli::Command::Home { registry } => cli::home::run(&ctx, registry),
        cli::Command::Config(cmd) => cli::config::run(&mut ctx, cmd),
    }
}
