use std::path::Path;

use anyhow::Result;

use crate::config::{API_KEY_ENV, ApiKeySource, ENV_FILE, RuntimeConfig};
use crate::route::{PLANNING_KEYWORDS, TRANSLATION_KEYWORDS};

pub fn run_doctor(cfg: &RuntimeConfig) -> Result<()> {
    println!(
        "Active profile: '{}' (config: {})",
        cfg.profile, cfg.config_path
    );

    println!("Credential check:");
    println!("- {}: {}", API_KEY_ENV, cfg.api_key_source.label());
    if cfg.api_key_source == ApiKeySource::Missing {
        println!(
            "Tip: export {API_KEY_ENV} or add it to {ENV_FILE}. The stub teams run without it."
        );
    }

    let env_file_status = if Path::new(ENV_FILE).exists() {
        "found"
    } else {
        "not found"
    };
    println!("Env file ({ENV_FILE}): {env_file_status}");

    println!("Default task: {}", cfg.default_task);

    println!("Routing table (first match wins):");
    println!("- autogen: {}", TRANSLATION_KEYWORDS.join(", "));
    println!("- crew: {}", PLANNING_KEYWORDS.join(", "));
    println!("- swarm: <default>");

    Ok(())
}
