use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Demo task used when `run` is invoked without arguments.
pub const DEFAULT_TASK: &str = "Escreva e traduza um email de agradecimento";

/// The one credential this tool recognizes. Nothing reads it yet; its
/// presence is only surfaced by `doctor`.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Local env file consulted when the process environment lacks the key.
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub profile: String,
    pub config_path: String,
    pub default_task: String,
    pub api_key: Option<String>,
    pub api_key_source: ApiKeySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Process,
    EnvFile,
    Missing,
}

impl ApiKeySource {
    pub fn label(self) -> &'static str {
        match self {
            ApiKeySource::Process => "process environment",
            ApiKeySource::EnvFile => ".env file",
            ApiKeySource::Missing => "missing",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub default_task: Option<String>,
}

/// Load the profile file if it exists. A missing file is not an error (the
/// built-in defaults apply); a malformed file is.
pub fn load_profiles(config_path: &str) -> Result<ProfilesFile> {
    let path = Path::new(config_path);
    if !path.exists() {
        return Ok(ProfilesFile::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile config file at '{}'", path.display()))?;
    toml::from_str::<ProfilesFile>(&content).with_context(|| {
        format!(
            "invalid profile configuration in '{}'. Check field names.",
            path.display()
        )
    })
}

pub fn resolve_runtime_config(cli: &Cli, profiles: &ProfilesFile) -> Result<RuntimeConfig> {
    let selected = cli.profile.trim();
    if selected.is_empty() {
        return Err(anyhow::anyhow!(
            "profile name must not be empty. Use --profile default for built-in defaults."
        ));
    }

    if selected != "default" && !profiles.profiles.contains_key(selected) {
        return Err(anyhow::anyhow!(
            "profile '{}' not found in '{}'",
            selected,
            cli.config_path
        ));
    }

    let profile = profiles.profiles.get(selected).cloned().unwrap_or_default();
    let env_file = load_env_file(Path::new(ENV_FILE));
    let (api_key, api_key_source) = api_key_lookup(std::env::var(API_KEY_ENV).ok(), &env_file);

    Ok(RuntimeConfig {
        profile: selected.to_string(),
        config_path: cli.config_path.clone(),
        default_task: profile
            .default_task
            .unwrap_or_else(|| DEFAULT_TASK.to_string()),
        api_key,
        api_key_source,
    })
}

/// Lenient KEY=VALUE parser for a local env file. Absence, unreadable
/// content, comments, blank lines and lines without '=' all degrade to
/// "no entries" rather than an error.
pub fn load_env_file(path: &Path) -> HashMap<String, String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return HashMap::new();
    };

    let mut entries = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        entries.insert(key.to_string(), value.trim().to_string());
    }
    entries
}

/// Process environment wins over the env file; empty values count as unset.
pub fn api_key_lookup(
    process_value: Option<String>,
    env_file: &HashMap<String, String>,
) -> (Option<String>, ApiKeySource) {
    if let Some(value) = process_value.filter(|v| !v.trim().is_empty()) {
        return (Some(value), ApiKeySource::Process);
    }

    if let Some(value) = env_file.get(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
        return (Some(value.clone()), ApiKeySource::EnvFile);
    }

    (None, ApiKeySource::Missing)
}
