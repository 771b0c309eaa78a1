use std::fs::File;
use std::io::{self, BufReader, Write};

use clap::Parser;
use kunai_app::card::read_documents;
use kunai_app::cli::Cli;
use kunai_app::render::render_all;
use kunai_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Reads card documents from the file named on the command line, or stdin,
/// and writes them to stdout as vCards.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let cards = match cli.input() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Reading card documents");
            read_documents(BufReader::new(File::open(path)?))?
        }
        None => read_documents(io::stdin().lock())?,
    };

    let mut stdout = io::stdout().lock();
    render_all(&mut stdout, &cards, &config.writer)?;
    stdout.flush()?;

    Ok(())
}
