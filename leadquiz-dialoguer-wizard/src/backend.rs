//! Dialoguer backend implementation for the QuizFrontend trait.

use dialoguer::{
    Confirm, FuzzySelect, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use leadquiz::{
    InputDraft, LocationDraft, Question, QuestionKind, QuizError, QuizFrontend, QuizSession,
    TextDraft, TextVariant, VehicleDraft, VehicleTable, validation,
};
use thiserror::Error;
use tracing::{debug, info};

/// Label of the extra list entry that steps back one question.
const BACK: &str = "← Back";

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the quiz (e.g., pressed Ctrl+C or Escape).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The session rejected an answer that passed prompt validation.
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl From<DialoguerError> for QuizError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => QuizError::Cancelled,
            DialoguerError::Quiz(inner) => inner,
            other => QuizError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// What the user did at a prompt.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Answer(InputDraft),
    Back,
}

/// Dialoguer backend for interactive CLI prompts.
///
/// Each question is one prompt (three for the vehicle picker, two for the
/// location picker). List prompts get a trailing "← Back" entry once there
/// is something to go back to; text prompts go back on empty input.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Prompt for the current question.
    fn ask(&self, session: &QuizSession) -> Result<Outcome, DialoguerError> {
        let question = session.current_question();
        let can_go_back = session.can_go_back();

        println!();
        println!(
            "[Step {}/{} · {}]",
            session.position() + 1,
            session.question_count(),
            question.category().label()
        );
        if let Some(sub_text) = question.sub_text() {
            println!("{sub_text}");
        }

        match question.kind() {
            QuestionKind::SingleSelect(_) => self.ask_select(question, can_go_back),
            QuestionKind::VehiclePicker(table) => self.ask_vehicle(question, table, can_go_back),
            QuestionKind::LocationPicker(states) => {
                self.ask_location(question, states, can_go_back)
            }
            QuestionKind::Text(variant) => self.ask_text(question, *variant, can_go_back),
        }
    }

    /// Pick from `items`, with a back entry appended when allowed.
    /// Returns `None` when the back entry was chosen.
    fn pick(
        &self,
        prompt: &str,
        items: &[&str],
        can_go_back: bool,
        fuzzy: bool,
    ) -> Result<Option<usize>, DialoguerError> {
        let theme = self.theme();
        let items = with_back(items, can_go_back);

        let picked = if fuzzy {
            FuzzySelect::with_theme(&*theme)
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact_opt()
        } else {
            Select::with_theme(&*theme)
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact_opt()
        };

        let index = picked.map_err(prompt_error)?.ok_or(DialoguerError::Cancelled)?;
        Ok(resolve_pick(index, items.len(), can_go_back))
    }

    fn ask_select(&self, question: &Question, can_go_back: bool) -> Result<Outcome, DialoguerError> {
        let options = question.options();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        let Some(index) = self.pick(question.text(), &labels, can_go_back, false)? else {
            return Ok(Outcome::Back);
        };

        let mut draft = InputDraft::for_question(question);
        if let InputDraft::Select(select) = &mut draft {
            select.choose(options[index].id.clone());
        }
        Ok(Outcome::Answer(draft))
    }

    fn ask_vehicle(
        &self,
        question: &Question,
        table: &VehicleTable,
        can_go_back: bool,
    ) -> Result<Outcome, DialoguerError> {
        println!("{}", question.text());
        let mut draft = VehicleDraft::default();

        let years: Vec<&str> = table.years().iter().map(String::as_str).collect();
        let Some(year) = self.pick("Year", &years, can_go_back, true)? else {
            return Ok(Outcome::Back);
        };
        draft.set_year(years[year]);

        let makes: Vec<&str> = table.makes().collect();
        let Some(make) = self.pick("Make", &makes, false, true)? else {
            return Ok(Outcome::Back);
        };
        draft.set_make(makes[make]);

        let models: Vec<&str> = table.models(makes[make]).iter().map(String::as_str).collect();
        let Some(model) = self.pick("Model", &models, false, true)? else {
            return Ok(Outcome::Back);
        };
        draft.set_model(models[model]);

        Ok(Outcome::Answer(InputDraft::Vehicle(draft)))
    }

    fn ask_location(
        &self,
        question: &Question,
        states: &[String],
        can_go_back: bool,
    ) -> Result<Outcome, DialoguerError> {
        let mut draft = LocationDraft::default();

        let names: Vec<&str> = states.iter().map(String::as_str).collect();
        let Some(state) = self.pick(question.text(), &names, can_go_back, false)? else {
            return Ok(Outcome::Back);
        };
        draft.set_state(names[state]);

        let theme = self.theme();
        let zip: String = Input::with_theme(&*theme)
            .with_prompt("Zip Code")
            .validate_with(|input: &String| -> Result<(), &'static str> {
                let digits = validation::digits_only(input, validation::ZIP_DIGITS);
                if validation::is_valid_zip(&digits) && digits.len() == input.trim().len() {
                    Ok(())
                } else {
                    Err("Enter a 5 digit zip code")
                }
            })
            .interact_text()
            .map_err(prompt_error)?;
        draft.set_zip(&zip);

        Ok(Outcome::Answer(InputDraft::Location(draft)))
    }

    fn ask_text(
        &self,
        question: &Question,
        variant: TextVariant,
        can_go_back: bool,
    ) -> Result<Outcome, DialoguerError> {
        if let Some(disclaimer) = question.disclaimer() {
            println!("{disclaimer}");
        }

        let prompt = match question.placeholder() {
            Some(hint) => format!("{} ({hint})", question.text()),
            None => question.text().to_string(),
        };

        let theme = self.theme();
        let value: String = Input::with_theme(&*theme)
            .with_prompt(prompt)
            .allow_empty(can_go_back)
            .validate_with(move |input: &String| -> Result<(), &'static str> {
                if input.is_empty() && can_go_back {
                    return Ok(());
                }
                match text_draft(variant, input).blocker() {
                    Some(reason) => Err(reason),
                    None => Ok(()),
                }
            })
            .interact_text()
            .map_err(prompt_error)?;

        if value.is_empty() {
            return Ok(Outcome::Back);
        }
        Ok(Outcome::Answer(text_draft(variant, &value)))
    }

    /// Show the answers and ask whether to send them. Declining reopens the
    /// last question.
    fn confirm(&self, session: &QuizSession) -> Result<bool, DialoguerError> {
        println!();
        for (question, response) in session.transcript() {
            println!("  {}: {}", question.text(), response.display_value);
        }

        let theme = self.theme();
        Confirm::with_theme(&*theme)
            .with_prompt("Send these answers?")
            .default(true)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(DialoguerError::Cancelled)
    }
}

fn with_back<'a>(items: &[&'a str], can_go_back: bool) -> Vec<&'a str> {
    let mut items = items.to_vec();
    if can_go_back {
        items.push(BACK);
    }
    items
}

/// Map a picked list index to an item index, `None` for the back entry.
fn resolve_pick(index: usize, len: usize, can_go_back: bool) -> Option<usize> {
    (!(can_go_back && index + 1 == len)).then_some(index)
}

fn text_draft(variant: TextVariant, input: &str) -> InputDraft {
    let mut draft = TextDraft::new(variant);
    draft.set_value(input.trim());
    InputDraft::Text(draft)
}

impl QuizFrontend for DialoguerBackend {
    type Error = DialoguerError;

    fn collect(&self, session: &mut QuizSession) -> Result<(), Self::Error> {
        // Show prelude if present
        if let Some(prelude) = session.catalog().prelude() {
            println!("{prelude}");
        }

        loop {
            if session.is_complete() {
                if self.confirm(session)? {
                    break;
                }
                session.back();
                continue;
            }

            match self.ask(session)? {
                Outcome::Answer(draft) => {
                    session.submit(&draft)?;
                }
                Outcome::Back => {
                    debug!(position = session.position(), "back requested");
                    session.back();
                }
            }
        }

        // Show epilogue if present
        if let Some(epilogue) = session.catalog().epilogue() {
            println!();
            println!("{epilogue}");
        }
        info!("quiz finished in dialoguer front end");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let _backend = DialoguerBackend::new();
        let _plain = DialoguerBackend::plain();
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Quiz cancelled by user");
        assert!(QuizError::from(err).is_cancelled());

        let interrupted = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(prompt_error(interrupted), DialoguerError::Cancelled));
    }

    #[test]
    fn back_entry_only_when_allowed() {
        assert_eq!(with_back(&["a", "b"], false), vec!["a", "b"]);
        assert_eq!(with_back(&["a", "b"], true), vec!["a", "b", BACK]);
    }

    #[test]
    fn picked_back_entry_resolves_to_none() {
        assert_eq!(resolve_pick(1, 3, true), Some(1));
        assert_eq!(resolve_pick(2, 3, true), None);
        assert_eq!(resolve_pick(2, 3, false), Some(2));
    }

    #[test]
    fn text_drafts_are_trimmed_and_formatted() {
        let draft = text_draft(TextVariant::Phone, " 512 494 9400 ");
        match &draft {
            InputDraft::Text(text) => assert_eq!(text.value(), "(512) 494-9400"),
            other => panic!("unexpected draft: {other:?}"),
        }
        assert!(draft.is_submittable());
        assert!(!text_draft(TextVariant::Email, "nope").is_submittable());
    }
}
