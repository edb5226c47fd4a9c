use anyhow::Result;

use crate::config::{ProfilesFile, RuntimeConfig};

pub fn run_profiles_list(profiles: &ProfilesFile, cfg: &RuntimeConfig) -> Result<()> {
    let mut names = profiles.profiles.keys().cloned().collect::<Vec<String>>();
    if !names.iter().any(|name| name == "default") {
        // The default profile always exists, even without a config file.
        names.push("default".to_string());
    }
    names.sort();

    println!("Profiles in '{}' (active='{}'):", cfg.config_path, cfg.profile);
    for name in &names {
        let marker = if *name == cfg.profile { "*" } else { " " };
        let source = if profiles.profiles.contains_key(name) {
            "configured"
        } else {
            "implicit"
        };
        println!("{marker} {name} ({source})");
    }

    Ok(())
}

pub fn run_profiles_show(cfg: &RuntimeConfig) -> Result<()> {
    println!("Active profile: {}", cfg.profile);
    println!("Config path: {}", cfg.config_path);
    println!("Default task: {}", cfg.default_task);
    println!("OPENAI_API_KEY source: {}", cfg.api_key_source.label());
    Ok(())
}
