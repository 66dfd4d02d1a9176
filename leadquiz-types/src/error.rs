use crate::DraftError;

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// User cancelled the quiz (Esc, Ctrl+C, closed terminal).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// The last question was already answered.
    #[error("Quiz is already complete")]
    AlreadyComplete,

    /// A lead was requested before every question was answered.
    #[error("Quiz is not complete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    /// The submitted draft is not a valid answer to the current question.
    #[error("Invalid answer for '{question_id}': {source}")]
    InvalidAnswer {
        question_id: String,
        #[source]
        source: DraftError,
    },

    /// The option id does not belong to the current question.
    #[error("Unknown option '{option_id}' for question '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    /// The operation does not apply to the current question's kind.
    #[error("Question '{question_id}' is a {actual} question, not {expected}")]
    WrongKind {
        question_id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Front end or sink failure (I/O, terminal, prompt library).
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuizError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
