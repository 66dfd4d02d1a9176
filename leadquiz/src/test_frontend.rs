//! Test front end for running quizzes without user interaction.
//!
//! `TestFrontend` plays a fixed script of steps against a session. Every
//! step goes through the same drafts and validators an interactive front
//! end uses, so scripted runs exercise the real rules.
//!
//! # Example
//!
//! ```rust,ignore
//! use leadquiz::{QuizSession, TestFrontend};
//!
//! let lead = QuizSession::new(catalog)
//!     .run(
//!         TestFrontend::new()
//!             .with_vehicle("2020", "Toyota", "Camry")
//!             .with_select("lt100")
//!             .with_text("a@b.co"),
//!     )
//!     .unwrap();
//! ```

use std::fmt;

use tracing::debug;

use crate::{InputDraft, QuizError, QuizFrontend, QuizSession};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Click the option with this id.
    Select(String),

    /// Fill the vehicle picker and press next.
    Vehicle {
        year: String,
        make: String,
        model: String,
    },

    /// Fill the location picker and press next.
    Location { state: String, zip: String },

    /// Type into the text field and press next.
    Text(String),

    /// Press back.
    Back,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(id) => write!(f, "select '{id}'"),
            Self::Vehicle { .. } => f.write_str("vehicle"),
            Self::Location { .. } => f.write_str("location"),
            Self::Text(_) => f.write_str("text"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// A front end that replays pre-configured steps.
#[derive(Debug, Clone, Default)]
pub struct TestFrontend {
    steps: Vec<Step>,
}

/// Error type for TestFrontend.
#[derive(Debug, thiserror::Error)]
pub enum TestFrontendError {
    #[error("Ran out of scripted steps at question '{0}'")]
    OutOfSteps(String),

    #[error("Step {step} does not fit {kind} question '{question_id}'")]
    StepMismatch {
        step: String,
        kind: &'static str,
        question_id: String,
    },

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl From<TestFrontendError> for QuizError {
    fn from(err: TestFrontendError) -> Self {
        match err {
            TestFrontendError::Quiz(inner) => inner,
            other => QuizError::backend(other),
        }
    }
}

impl TestFrontend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Click an option.
    pub fn with_select(self, option_id: impl Into<String>) -> Self {
        self.with_step(Step::Select(option_id.into()))
    }

    /// Fill the vehicle picker.
    pub fn with_vehicle(
        self,
        year: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        self.with_step(Step::Vehicle {
            year: year.into(),
            make: make.into(),
            model: model.into(),
        })
    }

    /// Fill the location picker.
    pub fn with_location(self, state: impl Into<String>, zip: impl Into<String>) -> Self {
        self.with_step(Step::Location {
            state: state.into(),
            zip: zip.into(),
        })
    }

    /// Type into a text field.
    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_step(Step::Text(value.into()))
    }

    /// Press back.
    pub fn with_back(self) -> Self {
        self.with_step(Step::Back)
    }

    fn draft_for(session: &QuizSession, step: &Step) -> Result<InputDraft, TestFrontendError> {
        let question = session.current_question();
        let mut draft = InputDraft::for_question(question);
        match (step, &mut draft) {
            (Step::Select(id), InputDraft::Select(select)) => select.choose(id.clone()),
            (Step::Vehicle { year, make, model }, InputDraft::Vehicle(vehicle)) => {
                vehicle.set_year(year.clone());
                vehicle.set_make(make.clone());
                vehicle.set_model(model.clone());
            }
            (Step::Location { state, zip }, InputDraft::Location(location)) => {
                location.set_state(state.clone());
                location.set_zip(zip);
            }
            (Step::Text(value), InputDraft::Text(text)) => text.set_value(value),
            _ => {
                return Err(TestFrontendError::StepMismatch {
                    step: step.to_string(),
                    kind: question.kind().name(),
                    question_id: question.id().to_string(),
                });
            }
        }
        Ok(draft)
    }
}

impl QuizFrontend for TestFrontend {
    type Error = TestFrontendError;

    fn collect(&self, session: &mut QuizSession) -> Result<(), Self::Error> {
        for step in &self.steps {
            debug!(%step, position = session.position(), "scripted step");
            if *step == Step::Back {
                session.back();
                continue;
            }
            let draft = Self::draft_for(session, step)?;
            session.submit(&draft)?;
        }

        if session.is_complete() {
            Ok(())
        } else {
            Err(TestFrontendError::OutOfSteps(
                session.current_question().id().to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Category, Question, QuizOption, TextVariant};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Question::single_select(
                "when",
                "When?",
                Category::Coverage,
                vec![QuizOption::new("asap", "As soon as possible", "asap")],
            ),
            Question::text_input("phone", "Phone?", Category::Quote, TextVariant::Phone),
        ])
        .unwrap()
    }

    #[test]
    fn scripted_run_produces_lead() {
        let lead = QuizSession::new(catalog())
            .run(TestFrontend::new().with_select("asap").with_text("5124949400"))
            .unwrap();
        assert_eq!(lead.raw_value("when"), Some("asap"));
        assert_eq!(lead.raw_value("phone"), Some("(512) 494-9400"));
    }

    #[test]
    fn missing_steps_are_reported() {
        let err = QuizSession::new(catalog())
            .run(TestFrontend::new().with_select("asap"))
            .unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn mismatched_step_is_reported() {
        let mut session = QuizSession::new(catalog());
        let err = TestFrontend::new()
            .with_text("hello")
            .collect(&mut session)
            .unwrap_err();
        assert!(matches!(err, TestFrontendError::StepMismatch { .. }));
    }

    #[test]
    fn rejected_answer_surfaces_quiz_error() {
        let err = QuizSession::new(catalog())
            .run(TestFrontend::new().with_select("asap").with_text("512"))
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidAnswer { .. }));
    }
}
