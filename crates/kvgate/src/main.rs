use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use kvgate::{app::create_app, state::AppState, storage::InMemoryStore};
use kvgate_core::storage::KeyValueStore;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// kvgate - HTTP key-value façade over a single DynamoDB table
#[derive(Parser, Debug)]
#[command(name = "kvgate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Serve on a local TCP listener instead of the Lambda runtime
    #[arg(long, env = "KVGATE_LOCAL")]
    local: bool,

    /// Host address to bind the local server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port for the local server
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Keep records in process memory instead of DynamoDB
    #[arg(long)]
    in_memory: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format, cli.local);

    let state = AppState::new(build_store(&cli).await);
    let app = create_app(state);

    if cli.local {
        let addr = format!("{}:{}", cli.host, cli.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    } else {
        tracing::info!("Starting Lambda runtime");
        lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))
    }
}

/// Initialize the tracing subscriber.
///
/// ANSI colors are only used for the local server; CloudWatch shows raw
/// escape codes.
fn init_tracing(format: LogFormat, local: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kvgate=info,tower_http=info".into());

    let json = (format == LogFormat::Json).then(|| fmt::layer().json().with_target(false));
    let text = (format == LogFormat::Text).then(|| fmt::layer().with_ansi(local));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

/// Build the storage backend once for the lifetime of the process.
async fn build_store(cli: &Cli) -> Arc<dyn KeyValueStore> {
    if cli.in_memory {
        tracing::info!("Using in-memory store");
        return Arc::new(InMemoryStore::new());
    }

    #[cfg(feature = "dynamodb")]
    {
        let config = kvgate::config::StoreConfig::from_env();
        tracing::info!(backend = %config.target_display(), "Using DynamoDB store");
        Arc::new(kvgate::storage::DynamoDbStore::from_config(&config).await)
    }

    #[cfg(not(feature = "dynamodb"))]
    {
        tracing::warn!("Built without the dynamodb feature, using in-memory store");
        Arc::new(InMemoryStore::new())
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
