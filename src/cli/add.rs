use anyhow::{Context as _, Result};

use crate::context::Context;

pub fn run(ctx: &mut Context, name: String, url: String, home: Option<String>) -> Result<()> {
    let entry = ctx
        .store_mut()
        .add(&name, &url, home.as_deref())
        .context("failed to save custom registry")?;
    ctx.reload()?;

    println!("Added registry '{}' ({})", name.trim(), entry.registry);
    println!();
    super::ls::run(ctx)
}
