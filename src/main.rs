//! popdash - US State Historic Population Dashboard
//!
//! Loads a (state, year, population) CSV and serves an interactive native
//! dashboard: a shaded US map per year, a per-state history chart, and a
//! templated question box.

mod charts;
mod data;
mod gui;
mod query;

use anyhow::{anyhow, Context, Result};
use data::DataLoader;
use eframe::egui;
use gui::PopDashApp;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // Data source: first CLI argument, else the DATA_URL environment
    // variable. Without data the dashboard has nothing to serve.
    let source = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DATA_URL").ok())
        .context("no data source: pass a CSV path or URL as the first argument, or set DATA_URL")?;

    let table = DataLoader::load(&source)
        .with_context(|| format!("failed to load population data from `{}`", source))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([900.0, 650.0])
            .with_title("US State Historic Population Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "US State Historic Population Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(PopDashApp::new(cc, table)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
