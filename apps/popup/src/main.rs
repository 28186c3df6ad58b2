use anyhow::Context;
use clap::Parser;
use raft_domain::config::RaftConfig;
use raft_kernel::config::load_config;
use raft_logger::Logger;
use std::path::PathBuf;
use tracing::info;

/// Prerenders the Raft popup for the current settings and license.
#[derive(Debug, Parser)]
#[command(name = "raft-popup", version, about)]
struct Args {
    /// Configuration file (`.toml`, `.json`, `.yaml`); `raft.*` in the working directory otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the rendered document
    #[arg(short, long, default_value = "popup.html")]
    out: PathBuf,

    /// Render with the upgrade dialog open (free tier only)
    #[arg(long)]
    upgrade: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config: RaftConfig = load_config(args.config.as_deref())?;
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).config(&config.logging)?.init()?;

    let html = raft_popup::render_popup(&config, args.upgrade).await?;
    tokio::fs::write(&args.out, html)
        .await
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    info!(path = %args.out.display(), "Popup written");
    Ok(())
}
