use tracing::{debug, info, warn};

use crate::{
    Answer, Catalog, Category, InputDraft, Lead, Question, QuestionKind, QuizError, QuizFrontend,
    Response, ResponseHistory, StepStatus, step_statuses,
};

/// What happened after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this position.
    Next(usize),

    /// The last question was answered.
    Complete,
}

/// One user's pass through a catalog.
///
/// The session is the only owner of the current position and the response
/// history, and changes both in the same call. While the quiz is in
/// progress `history().len() == position()`. Once the last question is
/// answered the session is complete: the position stays on the last
/// question and the history holds one response per question.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Catalog,
    position: usize,
    history: ResponseHistory,
    complete: bool,
}

impl QuizSession {
    /// Start a session at the first question.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            position: 0,
            history: ResponseHistory::new(),
            complete: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of the question awaiting an answer.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn history(&self) -> &ResponseHistory {
        &self.history
    }

    /// Number of questions in the catalog.
    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The question at the current position.
    pub fn current_question(&self) -> &Question {
        &self.catalog.questions()[self.position]
    }

    /// Record an answer to the current question and move on.
    ///
    /// An empty display value falls back to the raw value.
    pub fn answer(
        &mut self,
        raw_value: impl Into<String>,
        display_value: impl Into<String>,
    ) -> Result<Advance, QuizError> {
        if self.complete {
            return Err(QuizError::AlreadyComplete);
        }

        let question_id = self.current_question().id().to_string();
        let response = Response::new(question_id, raw_value, display_value);
        debug!(
            question = %response.question_id,
            position = self.position,
            "answer recorded"
        );
        self.history.push(response);

        if self.position < self.catalog.last_index() {
            self.position += 1;
            Ok(Advance::Next(self.position))
        } else {
            self.complete = true;
            info!(answered = self.history.len(), "quiz complete");
            Ok(Advance::Complete)
        }
    }

    /// Record a normalized answer.
    pub fn record(&mut self, answer: Answer) -> Result<Advance, QuizError> {
        self.answer(answer.raw_value, answer.display_value)
    }

    /// Answer the current single-select question with one of its options.
    pub fn select_option(&mut self, option_id: &str) -> Result<Advance, QuizError> {
        let question = self.current_question();
        if !matches!(question.kind(), QuestionKind::SingleSelect(_)) {
            return Err(QuizError::WrongKind {
                question_id: question.id().to_string(),
                expected: "single-select",
                actual: question.kind().name(),
            });
        }
        let option = question
            .option(option_id)
            .ok_or_else(|| QuizError::UnknownOption {
                question_id: question.id().to_string(),
                option_id: option_id.to_string(),
            })?;
        let answer = Answer::new(option.value.clone(), option.label.clone());
        self.record(answer)
    }

    /// Validate `draft` against the current question and record it.
    ///
    /// An invalid draft leaves the session untouched.
    pub fn submit(&mut self, draft: &InputDraft) -> Result<Advance, QuizError> {
        if self.complete {
            return Err(QuizError::AlreadyComplete);
        }
        let question = self.current_question();
        let answer = draft.submission(question).map_err(|source| {
            warn!(question = question.id(), %source, "submission rejected");
            QuizError::InvalidAnswer {
                question_id: question.id().to_string(),
                source,
            }
        })?;
        self.record(answer)
    }

    /// Step back one question, dropping the answer given to it.
    ///
    /// On a complete session this reopens the last question. Returns
    /// `false` when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        if self.complete {
            self.complete = false;
            self.history.pop();
            debug!(position = self.position, "reopened last question");
            return true;
        }
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.history.pop();
        debug!(position = self.position, "went back");
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0 || self.complete
    }

    /// Category of the current question, for the step indicator.
    pub fn progress_category(&self) -> Category {
        self.current_question().category()
    }

    /// Every category with its status relative to the current one.
    pub fn step_statuses(&self) -> [(Category, StepStatus); 4] {
        step_statuses(self.progress_category())
    }

    /// Past responses paired with the questions they answer, in order.
    pub fn transcript(&self) -> impl Iterator<Item = (&Question, &Response)> {
        self.history
            .iter()
            .filter_map(|r| self.catalog.find(&r.question_id).map(|q| (q, r)))
    }

    /// The question a response belongs to.
    pub fn question_for(&self, response: &Response) -> Option<&Question> {
        self.catalog.find(&response.question_id)
    }

    /// A copy of the finished history as a lead.
    pub fn lead(&self) -> Result<Lead, QuizError> {
        self.ensure_complete()?;
        Ok(Lead::from(self.history.clone()))
    }

    /// Consume the finished session into a lead.
    pub fn into_lead(self) -> Result<Lead, QuizError> {
        self.ensure_complete()?;
        Ok(Lead::from(self.history))
    }

    /// Let `frontend` drive the session until it is complete.
    pub fn run<F: QuizFrontend>(mut self, frontend: F) -> Result<Lead, QuizError> {
        frontend
            .collect(&mut self)
            .map_err(Into::<QuizError>::into)?;
        self.into_lead()
    }

    fn ensure_complete(&self) -> Result<(), QuizError> {
        if self.complete {
            Ok(())
        } else {
            Err(QuizError::Incomplete {
                answered: self.history.len(),
                total: self.catalog.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuizOption, TextDraft, TextVariant};

    fn three_questions() -> Catalog {
        Catalog::new(vec![
            Question::single_select(
                "miles",
                "Miles?",
                Category::Vehicle,
                vec![
                    QuizOption::new("lt100", "Less than 100k", "<100k"),
                    QuizOption::new("gt200", "More than 200k", ">200k"),
                ],
            ),
            Question::location("state", "State?", Category::Location, ["TX", "CA"]),
            Question::text_input("email", "Email?", Category::Quote, TextVariant::Email),
        ])
        .unwrap()
    }

    #[test]
    fn starts_at_first_question() {
        let session = QuizSession::new(three_questions());
        assert_eq!(session.position(), 0);
        assert!(session.history().is_empty());
        assert!(!session.can_go_back());
        assert_eq!(session.current_question().id(), "miles");
        assert_eq!(session.progress_category(), Category::Vehicle);
    }

    #[test]
    fn answer_advances_and_appends_together() {
        let mut session = QuizSession::new(three_questions());
        assert_eq!(session.answer("<100k", "Less than 100k").unwrap(), Advance::Next(1));
        assert_eq!(session.history().len(), session.position());
        assert_eq!(session.history().last().unwrap().question_id, "miles");
        assert_eq!(session.progress_category(), Category::Location);
    }

    #[test]
    fn back_at_start_is_noop() {
        let mut session = QuizSession::new(three_questions());
        assert!(!session.back());
        assert_eq!(session.position(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn back_then_answer_replaces() {
        let mut session = QuizSession::new(three_questions());
        session.answer("<100k", "Less than 100k").unwrap();
        assert!(session.back());
        session.answer(">200k", "More than 200k").unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().get(0).unwrap().raw_value, ">200k");
    }

    #[test]
    fn last_answer_completes_without_advancing() {
        let mut session = QuizSession::new(three_questions());
        session.answer("<100k", "").unwrap();
        session.answer("{}", "TX, 78704").unwrap();
        assert_eq!(session.answer("a@b.co", "").unwrap(), Advance::Complete);

        assert!(session.is_complete());
        assert_eq!(session.position(), 2);
        assert_eq!(session.history().len(), 3);
        assert!(matches!(
            session.answer("x@y.zz", ""),
            Err(QuizError::AlreadyComplete)
        ));
    }

    #[test]
    fn back_from_complete_reopens_last_question() {
        let mut session = QuizSession::new(three_questions());
        session.answer("<100k", "").unwrap();
        session.answer("{}", "TX, 78704").unwrap();
        session.answer("a@b.co", "").unwrap();

        assert!(session.back());
        assert!(!session.is_complete());
        assert_eq!(session.position(), 2);
        assert_eq!(session.history().len(), session.position());
    }

    #[test]
    fn select_option_uses_value_and_label() {
        let mut session = QuizSession::new(three_questions());
        session.select_option("gt200").unwrap();
        let response = session.history().get(0).unwrap();
        assert_eq!(response.raw_value, ">200k");
        assert_eq!(response.display_value, "More than 200k");
    }

    #[test]
    fn select_option_rejects_unknown_and_wrong_kind() {
        let mut session = QuizSession::new(three_questions());
        assert!(matches!(
            session.select_option("nope"),
            Err(QuizError::UnknownOption { .. })
        ));
        session.select_option("lt100").unwrap();
        assert!(matches!(
            session.select_option("lt100"),
            Err(QuizError::WrongKind { .. })
        ));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn invalid_draft_leaves_session_untouched() {
        let mut session = QuizSession::new(three_questions());
        session.select_option("lt100").unwrap();
        session.answer("{}", "TX, 78704").unwrap();

        let mut draft = TextDraft::new(TextVariant::Email);
        draft.set_value("a@b");
        let err = session.submit(&InputDraft::Text(draft.clone())).unwrap_err();
        assert!(matches!(err, QuizError::InvalidAnswer { .. }));
        assert_eq!(session.position(), 2);
        assert_eq!(session.history().len(), 2);

        draft.set_value("a@b.co");
        assert_eq!(
            session.submit(&InputDraft::Text(draft)).unwrap(),
            Advance::Complete
        );
    }

    #[test]
    fn lead_requires_completion() {
        let mut session = QuizSession::new(three_questions());
        assert!(matches!(
            session.lead(),
            Err(QuizError::Incomplete {
                answered: 0,
                total: 3
            })
        ));
        session.select_option("lt100").unwrap();
        session.answer("{}", "TX, 78704").unwrap();
        session.answer("a@b.co", "").unwrap();
        let lead = session.into_lead().unwrap();
        assert_eq!(lead.responses.len(), 3);
    }

    #[test]
    fn transcript_pairs_questions_with_responses() {
        let mut session = QuizSession::new(three_questions());
        session.select_option("lt100").unwrap();
        let pairs: Vec<_> = session
            .transcript()
            .map(|(q, r)| (q.text().to_string(), r.display_value.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Miles?".to_string(), "Less than 100k".to_string())]
        );
    }
}
