use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use multiagent_cli::cli::{Cli, Commands, ProfileCommands, command_label};
use multiagent_cli::config::{load_profiles, resolve_runtime_config};
use multiagent_cli::doctor::run_doctor;
use multiagent_cli::error::{categorize_error, format_cli_error};
use multiagent_cli::orchestrator::Orchestrator;
use multiagent_cli::profiles::{run_profiles_list, run_profiles_show};
use multiagent_cli::route::classify_route;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = run_cli(cli) {
        eprintln!("{}", format_cli_error(&err));
        tracing::error!(category = %categorize_error(&err).code(), error = %err, "command failed");
        std::process::exit(1);
    }

    Ok(())
}

fn run_cli(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_filter)?;
    let profiles = load_profiles(&cli.config_path)?;
    let cfg = resolve_runtime_config(&cli, &profiles)?;

    // No subcommand runs the demo task, mirroring the scaffold's entrypoint.
    let command = cli.command.unwrap_or(Commands::Run { task: Vec::new() });
    tracing::debug!(command = %command_label(&command), "dispatching command");

    match command {
        Commands::Run { task } => {
            let task = if task.is_empty() {
                cfg.default_task.clone()
            } else {
                task.join(" ")
            };
            let orchestrator = Orchestrator::new();
            println!("\n=== Running orchestrator demo task ===\n");
            let result = orchestrator.execute_task(&task);
            println!("\n=== Result ===");
            println!("{result}");
        }
        Commands::Route { task, json } => {
            let task = task.join(" ");
            let route = classify_route(&task);
            if json {
                let record = serde_json::json!({ "task": task, "route": route });
                println!("{}", serde_json::to_string(&record)?);
            } else {
                println!("{}", route.label());
            }
        }
        Commands::Doctor => {
            run_doctor(&cfg)?;
        }
        Commands::Profiles { command } => match command {
            ProfileCommands::List => run_profiles_list(&profiles, &cfg)?,
            ProfileCommands::Show => run_profiles_show(&cfg)?,
        },
    }

    Ok(())
}

fn init_tracing(log_filter: &str) -> Result<()> {
    let level = log_filter
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_env_filter(log_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}
