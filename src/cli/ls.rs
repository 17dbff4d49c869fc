use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::display;

pub fn run(ctx: &Context) -> Result<()> {
    let current = ctx
        .current()
        .context("failed to read the active registry")?;
    display::print_list(ctx.registries(), &current);
    Ok(())
}
