use anyhow::{Context, Result};
use exoscraper::download::{ExoplanetDownloader, CONFIRMED_PLANETS_FILE};
use exoscraper::ColumnFlags;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure downloader ─────────────────────────────────────
    let downloader =
        ExoplanetDownloader::new("data", false).context("creating output directory")?;

    // ─── 3) confirmed planets (default parameter sets) ───────────────
    let flags = ColumnFlags::default();
    match downloader.download_confirmed_planets(&flags, CONFIRMED_PLANETS_FILE) {
        Ok(outcome) => info!(?outcome, "confirmed planets done"),
        Err(e) => error!("confirmed planets failed: {}", e),
    }

    // ─── 4) composite-parameter references ───────────────────────────
    match downloader.download_references() {
        Ok(outcome) => info!(?outcome, "references done"),
        Err(e) => error!("references failed: {}", e),
    }

    info!("all done");
    Ok(())
}
