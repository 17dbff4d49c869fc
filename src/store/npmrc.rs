use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NrmError;

pub const NPMRC_FILE: &str = ".npmrc";

/// Point the project-level `.npmrc` in `dir` at `url`, returning the file written.
pub fn write_local_registry(dir: &Path, url: &str) -> Result<PathBuf, NrmError> {
    let path = dir.join(NPMRC_FILE);

    let content = if path.exists() {
        let existing = fs::read_to_string(&path).map_err(|source| NrmError::FileRead {
            path: path.clone(),
            source,
        })?;
        rewrite_registry_line(&existing, url)
    } else {
        format!("registry={url}")
    };

    fs::write(&path, content).map_err(|source| NrmError::FileWrite {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), url, "wrote local registry");
    Ok(path)
}

/// Replace every `registry=` line, keeping all other lines and line endings verbatim.
/// Appends the line when none exists.
pub fn rewrite_registry_line(content: &str, url: &str) -> String {
    let line = format!("registry={url}");
    let mut out = String::with_capacity(content.len() + line.len());
    let mut replaced = false;

    for chunk in content.split_inclusive('\n') {
        let body = chunk.trim_end_matches(['\n', '\r']);
        if body.starts_with("registry=") {
            out.push_str(&line);
            out.push_str(&chunk[body.len()..]);
            replaced = true;
        } else {
            out.push_str(chunk);
        }
    }

    if !replaced {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&line);
    }
    out
}
