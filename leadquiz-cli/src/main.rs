//! Runs the auto warranty quiz and writes the resulting lead.

mod cli;
mod logging;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use leadquiz::{JsonLinesSink, Lead, LeadSink, QuizSession};
use leadquiz_catalogs::auto_warranty;
use leadquiz_dialoguer_wizard::DialoguerBackend;
use leadquiz_ratatui_wizard::{RatatuiBackend, RevealTiming};
use tracing::info;

use crate::cli::{Cli, Frontend};

const TITLE: &str = "Best Extended Auto Warranty";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli)?;

    info!(frontend = ?cli.frontend, "starting quiz");
    let session = QuizSession::new(auto_warranty()?);

    let result = match cli.frontend {
        Frontend::Tui => {
            let reveal = if cli.instant {
                RevealTiming::instant()
            } else {
                RevealTiming::default()
            };
            session.run(RatatuiBackend::new().with_title(TITLE).with_reveal(reveal))
        }
        Frontend::Cli => {
            let backend = if cli.plain {
                DialoguerBackend::plain()
            } else {
                DialoguerBackend::new()
            };
            session.run(backend)
        }
    };

    let lead = match result {
        Ok(lead) => lead,
        Err(err) if err.is_cancelled() => {
            info!("quiz cancelled");
            eprintln!("Quiz cancelled, nothing was saved.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    write_lead(cli.output.as_deref(), &lead)
}

fn write_lead(output: Option<&Path>, lead: &Lead) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening output file {}", path.display()))?;
            JsonLinesSink::new(file).submit(lead)?;
            eprintln!("Lead saved to {}", path.display());
        }
        None => JsonLinesSink::new(io::stdout().lock()).submit(lead)?,
    }
    Ok(())
}
