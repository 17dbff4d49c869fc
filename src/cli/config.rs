use anyhow::{Context as _, Result};

use crate::cli::ConfigSubcommand;
use crate::context::Context;
use crate::model::PackageManager;

pub fn run(ctx: &mut Context, cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => run_show(ctx),
        ConfigSubcommand::Set { key, value } => run_set(ctx, key, value),
        ConfigSubcommand::Get { key } => run_get(ctx, key),
    }
}

fn run_show(ctx: &Context) -> Result<()> {
    let config = ctx.config();
    println!("Config directory:  {}", ctx.config_dir().display());
    println!(
        "Custom registries: {} ({} entries)",
        ctx.store().path().display(),
        ctx.store().custom().len()
    );
    println!("Package manager:   {}", config.package_manager);
    println!("Probe timeout:     {} ms", config.probe_timeout_ms);
    Ok(())
}

fn run_set(ctx: &mut Context, key: String, value: String) -> Result<()> {
    let config = ctx.config_mut();
    match key.as_str() {
        "package_manager" => {
            config.package_manager = value
                .parse::<PackageManager>()
                .map_err(anyhow::Error::msg)?;
        }
        "probe_timeout_ms" => {
            let ms = value.parse::<u64>().with_context(|| {
                format!("invalid probe_timeout_ms value: {value} (expected a number)")
            })?;
            if ms == 0 {
                anyhow::bail!("invalid probe_timeout_ms value: {value} (must be greater than 0)");
            }
            config.probe_timeout_ms = ms;
        }
        _ => anyhow::bail!(
            "unknown config key: {key}\nValid keys: package_manager, probe_timeout_ms"
        ),
    }

    ctx.save_config().context("failed to save config")?;
    println!("Set {key} = {value}");
    Ok(())
}

fn run_get(ctx: &Context, key: String) -> Result<()> {
    let config = ctx.config();
    match key.as_str() {
        "package_manager" => println!("{}", config.package_manager),
        "probe_timeout_ms" => println!("{}", config.probe_timeout_ms),
        _ => anyhow::bail!("unknown config key: {key}"),
    }
    Ok(())
}
