//! cueplay - inspect cue tracks and extract scrub previews

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cueplay::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Environment variable holding the log filter, e.g. `cueplay=debug`.
const LOG_ENV: &str = "CUEPLAY_LOG";

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse {
            file,
            chapters,
            json,
        } => commands::parse::handle(&file, chapters, json),
        Commands::At {
            file,
            time,
            chapters,
        } => commands::at::handle(&file, time, chapters),
        Commands::Format { seconds, total } => commands::format::handle(seconds, total),
        Commands::Markers { file, duration } => commands::markers::handle(&file, duration),
        Commands::Thumbnail {
            video,
            time,
            output,
        } => commands::thumbnail::handle(&video, time, &output),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
    }
}

/// Log to stderr, filtered by `CUEPLAY_LOG` (warnings only by default).
#[cfg(not(tarpaulin_include))]
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
