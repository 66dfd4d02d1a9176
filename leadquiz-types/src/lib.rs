//! Core types for the leadquiz crate.
//!
//! This crate provides the foundational types for running a lead quiz:
//! - `Catalog` and `Question` - The fixed, ordered question list
//! - `QuizSession` - Position and response history for one pass through a catalog
//! - `InputDraft` and `validation` - Per-question input state and field rules
//! - `QuizFrontend` and `LeadSink` traits - For presenting quizzes and storing leads

mod category;
pub use category::{Category, StepStatus, step_statuses};

mod vehicle;
pub use vehicle::{VehicleMake, VehicleTable};

mod question;
pub use question::{Question, QuestionKind, QuizOption, TextVariant};

mod catalog;
pub use catalog::{Catalog, CatalogError};

mod response;
pub use response::{Lead, Response, ResponseHistory};

mod answer;
pub use answer::{Answer, LocationAnswer, VehicleAnswer};

pub mod validation;

mod draft;
pub use draft::{DraftError, InputDraft, LocationDraft, SelectDraft, TextDraft, VehicleDraft};

mod error;
pub use error::QuizError;

mod session;
pub use session::{Advance, QuizSession};

mod traits;
pub use traits::{LeadSink, QuizFrontend};
