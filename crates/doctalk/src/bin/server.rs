//! Q&A server binary
//!
//! Run with: cargo run -p doctalk --bin doctalk-server

use doctalk::{config::DoctalkConfig, server::DoctalkServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doctalk=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = DoctalkConfig::load()?;

    tracing::info!("configuration loaded");
    tracing::info!("  - completion model: {}", config.completion.model);
    tracing::info!("  - completion endpoint: {}", config.completion.base_url);
    tracing::info!("  - max upload size: {} bytes", config.server.max_upload_size);

    let server = DoctalkServer::new(config);

    println!("\nDoctalk - document Q&A service");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/sessions                 - Start a session");
    println!("  POST /api/sessions/:id/documents   - Upload documents");
    println!("  POST /api/sessions/:id/ask         - Ask a question");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
