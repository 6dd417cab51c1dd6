use anyhow::{Context, Result};
use candidate_intake::core::ConfigManager;
use candidate_intake::environment::{EnvironmentConfig, LoggingSettings};
use candidate_intake::start_web_server;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "candidate_intake=info,rocket=warn";

#[derive(Parser)]
#[command(name = "candidate-intake")]
#[command(about = "Booking webhook that files candidates into the recruiting pipeline")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "INTAKE_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the configured listen port
    #[arg(short, long, env = "ROCKET_PORT")]
    port: Option<u16>,
}

fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match (&settings.file, settings.json) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(Mutex::new(file))
                        .with_current_span(true)
                        .with_span_list(false),
                )
                .with(filter)
                .init();
        }
        (None, true) => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .init();
        }
        (None, false) => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .init();
        }
    }

    Ok(())
}

fn log_startup(environment: &EnvironmentConfig) {
    info!("Environment: {}", EnvironmentConfig::get_environment());
    info!("Answer lookup: {:?}", environment.answer_lookup);
    info!("Record store database: {}", environment.record_store.database_id);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigManager::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.environment.server.port = port;
    }

    init_logging(&config.environment.logging)?;
    log_startup(&config.environment);

    let context = config.build_context()?;
    start_web_server(context, &config.environment.server).await
}
