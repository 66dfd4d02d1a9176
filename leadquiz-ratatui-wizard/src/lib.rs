//! Ratatui front end for leadquiz.
//!
//! Runs a [`leadquiz::QuizSession`] in the terminal as a chat-styled
//! wizard: questions are "typed" in one at a time, earlier answers scroll
//! above them, and a sidebar shows which step of the quiz is active.
//!
//! ```rust,ignore
//! use leadquiz::QuizSession;
//! use leadquiz_ratatui_wizard::RatatuiBackend;
//!
//! let lead = QuizSession::new(catalog).run(RatatuiBackend::new().with_title("Quiz"))?;
//! ```

mod backend;
mod reveal;
mod ui;

pub use backend::{RatatuiBackend, RatatuiError, Theme};
pub use reveal::RevealTiming;
