use anyhow::Result;

use crate::context::Context;

pub fn run(ctx: &Context, name: String) -> Result<()> {
    let entry = ctx.get(&name)?;
    match &entry.home {
        Some(home) => println!("{home}"),
        None => println!("Registry '{name}' has no home page."),
    }
    Ok(())
}
