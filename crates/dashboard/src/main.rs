// File: crates/dashboard/src/main.rs
// Summary: ev-dashboard binary: settings, one dataset load, page composition and file output.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ev_dashboard::cli::Args;
use ev_dashboard::output::write_dashboard;
use ev_dashboard::{battery_charts, DataSource, LoadState, Page, Session, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let settings = Settings::load(&args)?;
    let opts = settings.render_options()?;
    let charts = battery_charts().context("building chart set")?;
    let source = DataSource::parse(&settings.source)?;
    info!(%source, out_dir = %settings.out_dir.display(), "loading telemetry");

    let mut session = Session::new(source);
    let state = session.load().await;
    let page = Page::compose(state, &charts, &opts);
    let written = write_dashboard(&settings.out_dir, &page, state, &charts, &opts, settings.format)?;

    for path in &written {
        info!("Wrote {}", path.display());
    }
    if let LoadState::Failed(message) = state {
        info!(%message, "dashboard shows the load error");
    }
    Ok(())
}
