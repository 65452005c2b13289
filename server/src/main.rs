use anyhow::Result;
use axum::Router;
use clap::Parser;
use server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

/// Fallback catalog locations, checked when neither --data nor NETFLIX_CSV
/// points at a file.
const FALLBACK_PATHS: &[&str] = &["netflix_titles.csv", "data/netflix_titles.csv"];

#[derive(Parser)]
struct Args {
    /// Catalog CSV path (overrides NETFLIX_CSV and the default locations)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Directory holding index.html
    #[arg(long, default_value = ".")]
    assets: PathBuf,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

fn resolve_data_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = flag {
        candidates.push(path);
    }
    if let Ok(path) = std::env::var("NETFLIX_CSV") {
        candidates.push(PathBuf::from(path));
    }
    candidates.extend(FALLBACK_PATHS.iter().map(PathBuf::from));
    candidates.into_iter().find(|p| p.exists())
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let Some(data_path) = resolve_data_path(args.data) else {
        tracing::error!(
            "could not find the catalog CSV; pass --data, set NETFLIX_CSV, \
             or place netflix_titles.csv in the working directory"
        );
        std::process::exit(1);
    };

    tracing::info!(data = %data_path.display(), "loading catalog");
    let app: Router = build_app(&data_path, &args.assets)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
