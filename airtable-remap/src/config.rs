//! Environment-backed configuration

use anyhow::{Context, Result};

/// Environment variable holding the personal access token / API key.
pub const API_KEY_VAR: &str = "AIRTABLE_API_KEY";
/// Environment variable holding the default base id.
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";

/// Credentials and target base, resolved once at startup from the process
/// environment (after `dotenvy` has folded in any `.env` file).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_id: String,
}

impl Config {
    /// Load from the environment. `base_override` (the `--base` flag) takes
    /// precedence over the environment variable.
    pub fn from_env(base_override: Option<String>) -> Result<Self> {
        let api_key = require_var(API_KEY_VAR)?;
        let base_id = match base_override {
            Some(base_id) => base_id,
            None => require_var(BASE_ID_VAR)?,
        };
        Ok(Self { api_key, base_id })
    }
}

fn require_var(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .with_context(|| format!("Missing required environment variable {name}"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Environment variable {name} is set but empty");
    }
    Ok(value)
}
