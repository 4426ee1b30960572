use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riftmap::api::{create_router, AppState};
use riftmap::config::Config;
use riftmap::projection::ModelAssets;
use riftmap::riot::{MatchDataSource, RiotApiClient};

#[derive(Parser)]
#[command(name = "riftmap")]
#[command(about = "Places a player's recent ranked form next to professional players")]
struct Args {
    /// Directory holding scaler.json, embedding-model.json and pro-coords.json
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Load every artifact before accepting requests; exit if any fails
    #[arg(long)]
    preload: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riftmap=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(dir) = args.assets_dir {
        config.assets = config.assets.with_dir(dir);
    }

    tracing::info!("Initializing upstream client for {}...", config.riot.base_url);
    let client = RiotApiClient::new(&config.riot)?;
    let source: Arc<dyn MatchDataSource> = Arc::new(client);

    tracing::info!("Model assets directory: {}", config.assets.dir.display());
    let assets = ModelAssets::from_config(&config.assets);

    let cancel_token = CancellationToken::new();

    if args.preload {
        tracing::info!("Preloading model assets...");
        assets
            .warm_up()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to preload model assets: {e}"))?;
    } else {
        let warm = assets.clone();
        let token = cancel_token.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("Asset warm-up cancelled");
                }
                result = warm.warm_up() => {
                    if let Err(e) = result {
                        tracing::warn!("Background asset warm-up failed: {}", e);
                    }
                }
            }
        });
    }

    let state = AppState::new(config.clone(), source, assets);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Riftmap starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
