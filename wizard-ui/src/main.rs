use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use wizard_core::Locale;
use wizard_ui::{App, Outcome, WizardConfig, logging::init_logging, sinks::LogSink};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Bilingual project creation wizard.
///
/// Reads one command per line from stdin. Type `help` for the list.
#[derive(Debug, Parser)]
#[command(name = "project-wizard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with startup preferences.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start language, overriding the config file (fr or en).
    #[arg(short, long, value_parser = parse_locale)]
    lang: Option<Locale>,

    /// Log level or filter directive, overriding the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file, overriding the config file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::parse(s).ok_or_else(|| format!("unknown language '{s}' (expected fr or en)"))
}

impl Cli {
    fn resolve_config(&self) -> Result<WizardConfig> {
        let mut config = match &self.config {
            Some(path) => WizardConfig::load(path)?,
            None => WizardConfig::default(),
        };
        if let Some(locale) = self.lang {
            config.locale = locale;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.log_file = Some(file.clone());
        }
        Ok(config)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(&config.log_level, config.log_file.as_deref())?;
    debug!("configuration:\n{config}");

    let mut app = App::new(config.locale, LogSink::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", app.screen())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match app.handle_line(&line) {
            Ok(Outcome::Show(text)) => writeln!(out, "\n{text}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                warn!("{e}");
                writeln!(out, "! {e}")?;
            }
        }
        out.flush()?;
    }

    info!(projects = app.sink().accepted(), "session ended");
    Ok(())
}
