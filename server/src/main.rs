//! Frameview Server
//!
//! Serves the server-rendered explore page with an Axum backend.

use axum::Router;
use clap::Parser;
use tracing::info;

mod config;
mod render;
mod routes;
mod state;

use config::Config;
use state::AppState;

/// Frameview Server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to bind to
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    addr: String,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,frameview_server=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI args
    let args = Args::parse();

    // Load configuration and the frame to serve
    let config = Config::load(args.config.as_deref())?;
    let frame = config.load_frame()?;
    info!(
        addr = %args.addr,
        title = %frame.title,
        rows = frame.len(),
        "Starting Frameview server"
    );

    let state = AppState::new(config, frame);

    // Build Axum router
    let app = Router::new()
        .merge(routes::routes(state))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
        )
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(tower_http::cors::CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    info!(addr = %args.addr, "Server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
