use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::{pm, store};

pub fn run(ctx: &Context, registry: Option<String>, local: bool) -> Result<()> {
    let Some(name) = registry else {
        println!("Usage: nrm use <registry> [--local]");
        println!("Run `nrm ls` to see available registries.");
        return Ok(());
    };

    let entry = ctx.get(&name)?;
    let manager = ctx.package_manager();
    pm::set_registry(manager, &entry.registry)
        .with_context(|| format!("failed to point {manager} at '{name}'"))?;

    if local {
        let cwd = std::env::current_dir().context("failed to determine current directory")?;
        let path = store::write_local_registry(&cwd, &entry.registry)
            .context("failed to update local registry config")?;
        println!("Updated {}", path.display());
    }

    println!("Registry has been set to: {name} ({})", entry.registry);
    println!();
    super::ls::run(ctx)
}
