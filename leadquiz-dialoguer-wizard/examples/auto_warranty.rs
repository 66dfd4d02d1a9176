//! Auto warranty quiz as plain command-line prompts.
//!
//! Run with: cargo run -p leadquiz-dialoguer-wizard --example auto_warranty

use leadquiz::{JsonLinesSink, LeadSink, QuizSession};
use leadquiz_catalogs::auto_warranty;
use leadquiz_dialoguer_wizard::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let lead = QuizSession::new(auto_warranty()?).run(DialoguerBackend::new())?;

    JsonLinesSink::new(std::io::stdout()).submit(&lead)?;
    Ok(())
}
