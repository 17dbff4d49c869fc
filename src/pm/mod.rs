use std::process::Command;

use crate::error::NrmError;
use crate::model::PackageManager;

/// Config key used by yarn berry in place of `registry`.
const BERRY_REGISTRY_KEY: &str = "npmRegistryServer";

/// Read the registry URL the package manager is configured with.
pub fn get_registry(pm: PackageManager) -> Result<String, NrmError> {
    match run(pm, &["config", "get", "registry"]) {
        Ok(url) => Ok(url),
        Err(err) => {
            tracing::debug!(%pm, error = %err, "falling back to {BERRY_REGISTRY_KEY}");
            run(pm, &["config", "get", BERRY_REGISTRY_KEY])
        }
    }
}

pub fn set_registry(pm: PackageManager, url: &str) -> Result<(), NrmError> {
    run(pm, &["config", "set", "registry", url])?;
    Ok(())
}

fn run(pm: PackageManager, args: &[&str]) -> Result<String, NrmError> {
    let program = pm.program();
    tracing::debug!(program, ?args, "running package manager");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|_| NrmError::PackageManagerNotFound {
            program: program.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(NrmError::PackageManagerCommand {
            program: program.to_string(),
            args: args.join(" "),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
