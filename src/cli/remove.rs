use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::model::normalize_url;
use crate::pm;

/// Registry to fall back to when the active one is removed.
const FALLBACK_REGISTRY: &str = "npm";

pub fn run(ctx: &mut Context, name: String) -> Result<()> {
    let removed = ctx
        .store_mut()
        .remove(&name)
        .context("failed to update custom registries")?;

    if let Some(entry) = removed {
        ctx.reload()?;
        println!("Removed registry '{name}'");

        let current = ctx
            .current()
            .context("failed to read the active registry")?;
        if normalize_url(current.url()) == entry.registry {
            let fallback = ctx.get(FALLBACK_REGISTRY)?;
            let manager = ctx.package_manager();
            pm::set_registry(manager, &fallback.registry)
                .with_context(|| format!("failed to point {manager} at '{FALLBACK_REGISTRY}'"))?;
            println!("'{name}' was in use; switched to '{FALLBACK_REGISTRY}'");
        }
        println!();
    }

    super::ls::run(ctx)
}
