use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    #[command(about = "List configured profiles and highlight the active profile")]
    List,
    #[command(about = "Show the active profile's resolved runtime settings")]
    Show,
}

const CLI_EXAMPLES: &str = "Examples:\n\
  multiagent-cli run \"Escreva e traduza um email\"\n\
  multiagent-cli run \"planejar projeto novo\"\n\
  multiagent-cli route \"tarefa simples\"\n\
  multiagent-cli route --json \"Traduza este texto\"\n\
  multiagent-cli --profile demo --config .multiagent/config.toml run\n\
  multiagent-cli profiles list\n\
  multiagent-cli doctor\n\
\n\
Routing behavior:\n\
  - Tasks mentioning \"tradu\"/\"traduz\" go to the autogen-style team.\n\
  - Tasks mentioning \"projeto\"/\"planejar\"/\"plano\" go to the crew-style team.\n\
  - Everything else fans out to the swarm-style team.";

#[derive(Debug, Parser)]
#[command(name = "multiagent-cli")]
#[command(about = "Heuristic task router across autogen-, crew- and swarm-style stub teams")]
#[command(after_long_help = CLI_EXAMPLES)]
pub struct Cli {
    #[arg(long, env = "MULTIAGENT_PROFILE", default_value = "default")]
    pub profile: String,

    #[arg(long = "config", env = "MULTIAGENT_CONFIG", default_value = ".multiagent/config.toml")]
    pub config_path: String,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Route a task through the orchestrator and print the team output")]
    Run {
        /// Task text; defaults to the built-in demo task when omitted.
        task: Vec<String>,
    },
    #[command(about = "Show the route decision for a task without running the team")]
    Route {
        #[arg(required = true)]
        task: Vec<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    #[command(about = "Validate configuration and credential environment")]
    Doctor,
    #[command(about = "Inspect profile configuration and active resolved profile state")]
    Profiles {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

pub fn command_label(command: &Commands) -> String {
    match command {
        Commands::Run { .. } => "run".to_string(),
        Commands::Route { .. } => "route".to_string(),
        Commands::Doctor => "doctor".to_string(),
        Commands::Profiles { command } => match command {
            ProfileCommands::List => "profiles.list".to_string(),
            ProfileCommands::Show => "profiles.show".to_string(),
        },
    }
}
