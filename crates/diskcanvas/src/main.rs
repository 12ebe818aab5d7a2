use anyhow::{Context, Result};
use clap::Parser;
use diskcanvas::app::{self, RunConfig};
use diskcanvas::cli::Cli;
use diskcanvas::settings::Settings;
use std::io::{self, BufWriter};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let settings_path = match &cli.config {
        Some(config) => PathBuf::from(shellexpand::tilde(config).as_ref()),
        None => Settings::default_path(),
    };
    let settings = Settings::load(&settings_path).context("Failed to load settings")?;

    let config = RunConfig::resolve(&cli, &settings);
    tracing::debug!("Resolved {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    app::run(&config, app::terminal_size(), &mut out)
}
