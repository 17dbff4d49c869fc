//! Columnar, color-aware rendering of registry lists and probe results.
//!
//! Colors are applied with `if_supports_color`, so piped output and `NO_COLOR`
//! get plain text.

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::context::Current;
use crate::model::RegistrySet;
use crate::probe::{Latency, ProbeResult};

/// Dashes after the longest name.
const DASH_PADDING: usize = 3;

/// `* name ----- url` lines, one per registry, with the active one marked.
pub fn list_lines(registries: &RegistrySet, current: &Current) -> Vec<String> {
    let width = name_width(registries.keys().map(String::as_str));
    let active = current.name();

    registries
        .iter()
        .map(|(name, entry)| {
            let is_active = active == Some(name.as_str());
            let line = format!(
                "{} {} {} {}",
                marker(is_active),
                name,
                dashes(name, width),
                entry.registry
            );
            if is_active {
                line.if_supports_color(Stdout, |t| t.green()).to_string()
            } else {
                line
            }
        })
        .collect()
}

/// `* name ----- 123 ms` lines in result order.
pub fn latency_lines(results: &[ProbeResult], current: Option<&str>) -> Vec<String> {
    let width = name_width(results.iter().map(|r| r.name.as_str()));

    results
        .iter()
        .map(|r| {
            let is_active = current == Some(r.name.as_str());
            format!(
                "{} {} {} {}",
                marker(is_active),
                r.name,
                dashes(&r.name, width),
                colored_latency(&r.latency)
            )
        })
        .collect()
}

pub fn colored_latency(latency: &Latency) -> String {
    let text = latency.to_string();
    match latency {
        Latency::Fast(_) => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        Latency::Medium(_) => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        Latency::Slow(_) | Latency::Timeout => {
            text.if_supports_color(Stdout, |t| t.red()).to_string()
        }
    }
}

pub fn unknown_registry_warning(url: &str) -> String {
    format!("warning: your current registry ({url}) is not in the registry list")
}

/// Print the list, warning on stderr first when the active registry is unrecognized.
pub fn print_list(registries: &RegistrySet, current: &Current) {
    if let Current::Unknown(url) = current {
        eprintln!("{}", unknown_registry_warning(url));
    }
    for line in list_lines(registries, current) {
        println!("{line}");
    }
}

fn marker(active: bool) -> &'static str {
    if active { "*" } else { " " }
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}

fn dashes(name: &str, width: usize) -> String {
    "-".repeat(width - name.chars().count() + DASH_PADDING)
}
