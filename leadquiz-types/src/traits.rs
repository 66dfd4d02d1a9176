use crate::{Lead, QuizError, QuizSession};

/// Trait for front ends that drive a quiz session.
///
/// A front end presents the current question, collects input into an
/// [`InputDraft`](crate::InputDraft), and calls back into the session with
/// `submit`, `select_option` or `back`. It decides how to present the quiz
/// (TUI, prompts, scripted) but never touches position or history directly.
pub trait QuizFrontend {
    /// The error type for this front end.
    type Error: Into<QuizError>;

    /// Drive `session` until it is complete.
    ///
    /// # Returns
    /// * `Ok(())` once `session.is_complete()`
    /// * `Err` on cancellation or front end failure
    fn collect(&self, session: &mut QuizSession) -> Result<(), Self::Error>;
}

/// Destination for completed leads.
///
/// Sinks are opaque to the quiz: they receive the ordered responses and do
/// whatever the surrounding application needs with them.
pub trait LeadSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    /// Hand off one completed lead.
    fn submit(&mut self, lead: &Lead) -> Result<(), Self::Error>;
}
