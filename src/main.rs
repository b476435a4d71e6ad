mod ai;
mod config;
mod error;
mod mail;
mod server;

use anyhow::Result;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ai::{AiOrchestrator, CompletionClient};
use crate::config::Config;
use crate::mail::EmailGateway;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mailsmith=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("mailsmith.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"mailsmith - email compose service with AI-assisted drafting

Usage: mailsmith [command]

Commands:
    (none)      Start the HTTP service
    init        Write a default configuration file
    help        Show this help message

Configuration file: ~/.config/mailsmith/config.toml
Environment overrides: MAILSMITH_BACKEND_URL, MAILSMITH_AI_URL
"#
    );
}

fn run_init() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        anyhow::bail!("Configuration already exists at {}", config_path.display());
    }

    let config = Config::default();
    config.ensure_dirs()?;
    config.save()?;
    println!("Configuration written to {}", config_path.display());
    Ok(())
}

async fn run_serve() -> Result<()> {
    let config = Config::load()?;
    config.ensure_dirs()?;

    let completion = CompletionClient::new(&config.ai.base_url, &config.ai.model);
    let orchestrator = AiOrchestrator::new(completion);
    let gateway = EmailGateway::new(&config.backend.base_url);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    server::serve(listener, server::AppState::new(orchestrator, gateway)).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("init") => run_init(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();
            run_serve().await
        }
    }
}
