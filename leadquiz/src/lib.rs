//! # leadquiz
//!
//! Chat-style lead generation quizzes. Presentation-agnostic.
//!
//! A quiz is a fixed [`Catalog`] of questions walked in order by a
//! [`QuizSession`]. Front ends show the current question, collect input into
//! an [`InputDraft`], and hand valid drafts back to the session. When the
//! last question is answered the session becomes a [`Lead`], which is handed
//! to a [`LeadSink`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use leadquiz::{JsonLinesSink, LeadSink, QuizSession};
//!
//! let lead = QuizSession::new(catalog).run(frontend)?;
//! JsonLinesSink::new(std::io::stdout()).submit(&lead)?;
//! ```
//!
//! ## Question kinds
//!
//! - `SingleSelect` - clicking an option answers immediately
//! - `VehiclePicker` - year, make and model; changing the make clears the model
//! - `LocationPicker` - state plus a five digit zip code
//! - `Text` - email, full name, or phone (formatted as `(XXX) XXX-XXXX`)
//!
//! ## Front ends
//!
//! Front ends are separate crates that implement `QuizFrontend`:
//! - `leadquiz-ratatui-wizard` - chat-styled TUI with a step sidebar
//! - `leadquiz-dialoguer-wizard` - CLI prompts via dialoguer

// Re-export all types from leadquiz-types
pub use leadquiz_types::*;

// Test front end for running quizzes without user interaction
mod test_frontend;
pub use test_frontend::{Step, TestFrontend, TestFrontendError};

mod sink;
pub use sink::{JsonLinesSink, MemorySink, SinkError};
