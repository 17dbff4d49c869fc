use anyhow::{Context as _, Result};

use crate::context::{Context, Current};

pub fn run(ctx: &Context, show_url: bool) -> Result<()> {
    let current = ctx
        .current()
        .context("failed to read the active registry")?;

    match (&current, show_url) {
        (_, true) => println!("{}", current.url()),
        (Current::Known { name, .. }, false) => println!("{name}"),
        (Current::Unknown(url), false) => println!("{url}"),
    }
    Ok(())
}
