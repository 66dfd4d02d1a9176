//! Lead sinks: where completed quizzes are handed off.

use std::convert::Infallible;
use std::io::{self, Write};

use tracing::info;

use crate::{Lead, LeadSink};

/// Error type for [`JsonLinesSink`].
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not encode lead: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Writes each lead as one JSON object per line.
///
/// The line has the shape
/// `{"responses":[{"questionId":..,"rawValue":..,"displayValue":..}, ...]}`.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LeadSink for JsonLinesSink<W> {
    type Error = SinkError;

    fn submit(&mut self, lead: &Lead) -> Result<(), Self::Error> {
        serde_json::to_writer(&mut self.writer, lead)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        info!(responses = lead.responses.len(), "lead written");
        Ok(())
    }
}

/// Keeps leads in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    leads: Vec<Lead>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }
}

impl LeadSink for MemorySink {
    type Error = Infallible;

    fn submit(&mut self, lead: &Lead) -> Result<(), Self::Error> {
        self.leads.push(lead.clone());
        Ok(())
    }
}
