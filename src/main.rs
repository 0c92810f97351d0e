use anyhow::Context;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use meraki_mcp::config::profiles::PROFILES;
use meraki_mcp::config::{ServerConfig, Transport};
use meraki_mcp::core::{ApiRequest, DashboardApi, ToolModule};
use meraki_mcp::transport::{http, stdio, AppState};
use meraki_mcp::utils::error::{ErrorSeverity, MerakiError};
use meraki_mcp::utils::{logger, validation::Validate};
use meraki_mcp::{McpHandler, MerakiClient, ToolRegistry};
use serde_json::Value;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "meraki-mcp", version)]
#[command(about = "MCP server exposing the Cisco Meraki Dashboard API as tools")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the MCP server (default)
    Serve,
    /// Print the tools the current profile loads
    ListTools {
        /// Only tools of this module, e.g. SDK_wireless or helpers
        #[arg(long)]
        module: Option<String>,
    },
    /// Call one tool and print its output
    Call {
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Print the available profiles
    Profiles,
}

/// Stands in for the Dashboard when only tool metadata is needed.
struct OfflineApi;

#[async_trait]
impl DashboardApi for OfflineApi {
    async fn send(&self, _request: ApiRequest) -> meraki_mcp::Result<Value> {
        Err(MerakiError::MissingConfig {
            field: "api_key (MERAKI_API_KEY)".to_string(),
        })
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.config.verbose, cli.config.log_json);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<MerakiError>() {
            Some(error) => {
                tracing::error!(
                    "❌ {} (Category: {:?}, Severity: {:?})",
                    error,
                    error.category(),
                    error.severity()
                );
                eprintln!("❌ {}", error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", error.recovery_suggestion());

                let exit_code = match error.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.load_file()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }
    tracing::debug!("🔧 Config: {:?}", config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::ListTools { module } => list_tools(&config, module.as_deref()),
        Command::Call { tool, args } => call(&config, &tool, &args).await,
        Command::Profiles => {
            print_profiles();
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let api = Arc::new(MerakiClient::from_config(&config)?);
    let registry = ToolRegistry::build(&config, api)?;
    let handler = McpHandler::new(Arc::new(registry));

    match config.transport {
        Transport::Stdio => stdio::run(handler).await?,
        Transport::Http => {
            let state = AppState {
                handler: Arc::new(handler),
                token: config.auth_token.clone().filter(|t| !t.is_empty()),
            };
            http::serve(state, &config.bind_address()).await?;
        }
    }
    Ok(())
}

fn list_tools(config: &ServerConfig, module: Option<&str>) -> anyhow::Result<()> {
    let wanted = match module {
        Some(key) => Some(ToolModule::from_key(key).ok_or_else(|| {
            MerakiError::invalid_argument("module", format!("unknown module '{}'", key))
        })?),
        None => None,
    };
    let registry = ToolRegistry::build(config, Arc::new(OfflineApi))?;

    let mut shown = 0usize;
    for definition in registry.definitions() {
        if wanted.is_some_and(|m| m != definition.module) {
            continue;
        }
        let summary = definition.description.lines().next().unwrap_or_default();
        let access = if definition.read_only { "read " } else { "write" };
        println!(
            "{:<55} {:<22} {} {}",
            definition.name,
            definition.module.key(),
            access,
            summary
        );
        shown += 1;
    }
    println!();
    println!("📦 {} tools", shown);
    Ok(())
}

async fn call(config: &ServerConfig, tool: &str, raw_args: &str) -> anyhow::Result<()> {
    let arguments: Value =
        serde_json::from_str(raw_args).context("--args must be a JSON object")?;
    let api = Arc::new(MerakiClient::from_config(config)?);
    let registry = ToolRegistry::build(config, api)?;

    let outcome = registry.call(tool, &arguments).await?;
    println!("{}", outcome.text);
    if outcome.is_error {
        std::process::exit(1);
    }
    Ok(())
}

fn print_profiles() {
    for profile in PROFILES {
        println!("{} - {}", profile.key, profile.name);
        println!("    {}", profile.description);
        match profile.modules {
            Some(modules) => println!("    modules: {}", modules.join(", ")),
            None => println!("    modules: all"),
        }
    }
}
