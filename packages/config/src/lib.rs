// ABOUTME: Configuration helpers shared by PartnerDesk binaries
// ABOUTME: Environment variable names and typed lookups

pub mod constants;

use std::env;
use tracing::warn;

/// Reads an environment variable, treating blank values as unset
pub fn env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads a boolean flag ("true"/"false", "1"/"0", "yes"/"no"), falling back to `default`
pub fn env_flag(name: &str, default: bool) -> bool {
    match env_string(name) {
        None => default,
        Some(value) => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            other => {
                warn!("Ignoring invalid boolean for {}: '{}'", name, other);
                default
            }
        },
    }
}
