mod cli;
mod config;
mod engine;
mod error;
mod model;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::cli::{Cli, Command};
use crate::config::settings_io::{load_settings, save_settings, settings_path};
use crate::engine::client::MegaverseClient;
use crate::engine::painter::{Painter, ThreadSleep};
use crate::engine::transport::{DryRun, HttpTransport, Transport};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    cli.apply_overrides(&mut settings);

    let http = HttpTransport::new(settings.timeout()).context("building HTTP client")?;
    let transport: Box<dyn Transport> = if cli.dry_run {
        Box::new(DryRun::new(http))
    } else {
        Box::new(http)
    };

    let client = MegaverseClient::new(transport, settings.base_url.clone(), settings.candidate_id.clone());
    let mut painter = Painter::new(client, ThreadSleep, settings.row_delay());

    let report = match cli.command() {
        Command::Config => {
            save_settings(&path, &settings)?;
            info!("Settings written to {}", path.display());
            return Ok(());
        }
        Command::Goal => painter.draw_goal().context("drawing goal map")?,
        Command::Cross => painter.draw_cross().context("drawing cross")?,
        Command::Clear => painter.clear_goal().context("clearing goal map")?,
    };

    info!(
        "Done: {} rows, {} calls, {} blank, {} unrecognized",
        report.rows, report.calls, report.blank, report.unrecognized
    );
    Ok(())
}
