use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use api_ingress::{ApiIngress, ApiIngressConfig};
use users_directory::{config::UsersDirectoryConfig, UsersDirectory};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// User Directory Server - REST API over a directory of user records
#[derive(Parser)]
#[command(name = "directory-server")]
#[command(about = "User Directory Server - REST API over a directory of user records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI args passed down to config
    let args = CliArgs {
        port: cli.port,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    // Apply CLI overrides (port / verbosity)
    config.apply_cli_overrides(&args);

    // Initialize logging
    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &config.home_dir());
    tracing::info!("User Directory Server starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Execute command
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config).await,
    }
}

/// Typed module sections, validated before anything starts.
struct ModuleConfigs {
    ingress: ApiIngressConfig,
    users: UsersDirectoryConfig,
}

fn module_configs(config: &AppConfig) -> Result<ModuleConfigs> {
    Ok(ModuleConfigs {
        ingress: config.module_config(api_ingress::MODULE_NAME)?,
        users: config.module_config(users_directory::MODULE_NAME)?,
    })
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");
    let modules = module_configs(&config)?;

    let users = UsersDirectory::init(&modules.users, &config.home_dir()).await?;
    let ingress = ApiIngress::new(modules.ingress);
    let router = ingress.build_router(
        users.register_rest(axum::Router::new()),
        Some(UsersDirectory::openapi()),
    )?;

    let host = config.server.host.as_str();
    let port = config.server.port;
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {host}:{port}"))?;

    // Signals -> cancellation token -> graceful shutdown
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if let Err(e) = runtime::shutdown::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handler failed; shutting down");
            }
            cancel.cancel();
        }
    });

    let mut server = tokio::spawn(ApiIngress::serve(listener, router, cancel.clone()));

    tokio::select! {
        // Server stopped on its own, which only happens on error.
        res = &mut server => return res?,
        _ = cancel.cancelled() => {}
    }

    let timeout_sec = config.server.timeout_sec;
    if timeout_sec == 0 {
        server.await??;
    } else {
        match tokio::time::timeout(Duration::from_secs(timeout_sec), &mut server).await {
            Ok(res) => res??,
            Err(_) => {
                tracing::warn!(timeout_sec, "Graceful shutdown timed out; aborting in-flight requests");
                server.abort();
            }
        }
    }

    tracing::info!("User Directory Server stopped");
    Ok(())
}

async fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    // AppConfig::load_* already normalized & created home_dir
    module_configs(&config)?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
