use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "megaverse_painter", about = "Draw the megaverse goal map through the challenge API")]
pub struct Cli {
    /// Log writes instead of sending them; the goal map is still fetched.
    #[arg(long)]
    pub dry_run: bool,

    /// Settings file (defaults to the user config directory).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(long)]
    pub candidate_id: Option<String>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub row_delay_secs: Option<u64>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Replay the goal map cell by cell (default).
    Goal,
    /// Draw the fixed polyanet X.
    Cross,
    /// Delete every entity the goal map describes.
    Clear,
    /// Write the effective settings to the settings file.
    Config,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Goal)
    }

    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(id) = &self.candidate_id {
            settings.candidate_id = id.clone();
        }
        if let Some(url) = &self.base_url {
            settings.base_url = url.clone();
        }
        if let Some(secs) = self.row_delay_secs {
            settings.row_delay_secs = secs;
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout_secs = Some(secs);
        }
    }
}
