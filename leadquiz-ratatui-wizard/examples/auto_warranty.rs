//! Auto warranty quiz in the terminal.
//!
//! Run with: cargo run -p leadquiz-ratatui-wizard --example auto_warranty

use leadquiz::{JsonLinesSink, LeadSink, QuizSession};
use leadquiz_catalogs::auto_warranty;
use leadquiz_ratatui_wizard::RatatuiBackend;

fn main() -> anyhow::Result<()> {
    let backend = RatatuiBackend::new().with_title("Best Extended Auto Warranty");
    let lead = QuizSession::new(auto_warranty()?).run(backend)?;

    JsonLinesSink::new(std::io::stdout()).submit(&lead)?;
    Ok(())
}
