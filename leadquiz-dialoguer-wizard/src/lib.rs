//! # leadquiz-dialoguer-wizard
//!
//! Dialoguer front end for leadquiz.
//!
//! Questions are asked one after another as classic command-line prompts.
//! Single-select questions become a `Select`, the vehicle picker becomes
//! three fuzzy selects, and text questions are validated as you type.
//!
//! ## Example
//!
//! ```rust,ignore
//! use leadquiz::QuizSession;
//! use leadquiz_catalogs::auto_warranty;
//! use leadquiz_dialoguer_wizard::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let lead = QuizSession::new(auto_warranty()?).run(DialoguerBackend::new())?;
//!     println!("{} answers collected", lead.responses.len());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
