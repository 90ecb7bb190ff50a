use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use bookfetch::api::{AppState, create_router};
use bookfetch::config::CONFIG;
use bookfetch::search::BookSearch;

#[derive(Parser, Debug)]
#[command(name = "bookfetch", about = "JSON proxy for ziyonet.uz book search")]
struct Args {
    /// Address to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = CONFIG.clone();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let search = BookSearch::new(&config)?;
    let state = Arc::new(AppState {
        search,
        attribution: config.attribution.clone(),
    });
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("server is running at http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
