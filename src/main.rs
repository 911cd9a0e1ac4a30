//! Newsdesk command line
//!
//! Prints an agent's manifest for a host, or runs single tool calls the
//! way a host would.

use clap::{Parser, Subcommand};
use newsdesk::agent::{AgentError, NewsAgent};
use newsdesk::config::AgentConfig;
use newsdesk::observability::init_default_logging;
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// News lookup tools for LLM agent hosts
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "News lookup tools for LLM agent hosts")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "NEWSDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the agent manifest (identity, instruction, tool declarations)
    Manifest,
    /// Invoke one tool and print its result
    Call {
        /// Tool name, e.g. get_country_news
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let config = match load_configuration(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Manifest => print_manifest(config).await,
        Commands::Call { tool, args } => call_tool(config, &tool, &args).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: Option<&PathBuf>,
) -> Result<AgentConfig, Box<dyn std::error::Error>> {
    if let Some(path) = config_path {
        info!("Loading configuration from: {}", path.display());
        return Ok(AgentConfig::load_from_file(path)?);
    }

    for path_str in ["agent.toml", "config/agent.toml"] {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading configuration from: {}", path.display());
            return Ok(AgentConfig::load_from_file(&path)?);
        }
    }

    Err("No configuration file found. Provide one with -c/--config or create agent.toml".into())
}

async fn ready_agent(config: AgentConfig) -> Result<NewsAgent, AgentError> {
    let mut agent = NewsAgent::new(config);
    agent.initialize().await?;
    Ok(agent)
}

async fn print_manifest(config: AgentConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut agent = ready_agent(config).await?;
    println!("{}", serde_json::to_string_pretty(&agent.manifest())?);
    agent.shutdown().await?;
    Ok(())
}

async fn call_tool(
    config: AgentConfig,
    tool: &str,
    args: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let arguments: Value = serde_json::from_str(args)
        .map_err(|e| format!("--args must be a JSON object: {e}"))?;

    let mut agent = ready_agent(config).await?;
    let result = agent.invoke(tool, &arguments).await;
    agent.shutdown().await?;

    println!("{}", serde_json::to_string_pretty(&result?)?);
    Ok(())
}

fn handle_config_command(
    config: AgentConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
