//! Transient, per-question input state.
//!
//! A draft belongs to the front end, not to the quiz session: it is built
//! empty for the active question, edited field by field, and thrown away
//! whenever the active question changes. Only [`InputDraft::submission`]
//! turns it into an [`Answer`].

use crate::validation::{self, ZIP_DIGITS};
use crate::{Answer, LocationAnswer, Question, QuestionKind, TextVariant, VehicleAnswer};

/// Why a draft cannot be submitted.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// The draft is incomplete or fails validation.
    #[error("{0}")]
    Invalid(&'static str),

    /// The draft was built for a different kind of question.
    #[error("A {draft} draft cannot answer a {question} question")]
    WrongKind {
        draft: &'static str,
        question: &'static str,
    },

    /// The chosen option does not belong to the question.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// The structured value could not be serialized.
    #[error("Could not encode answer: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Draft values for the active question, one shape per question kind.
#[derive(Debug, Clone, PartialEq)]
pub enum InputDraft {
    Select(SelectDraft),
    Vehicle(VehicleDraft),
    Location(LocationDraft),
    Text(TextDraft),
}

impl InputDraft {
    /// An empty draft shaped for `question`.
    pub fn for_question(question: &Question) -> Self {
        match question.kind() {
            QuestionKind::SingleSelect(_) => Self::Select(SelectDraft::default()),
            QuestionKind::VehiclePicker(_) => Self::Vehicle(VehicleDraft::default()),
            QuestionKind::LocationPicker(_) => Self::Location(LocationDraft::default()),
            QuestionKind::Text(variant) => Self::Text(TextDraft::new(*variant)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Select(_) => "single-select",
            Self::Vehicle(_) => "vehicle-picker",
            Self::Location(_) => "location-picker",
            Self::Text(text) => text.variant.name(),
        }
    }

    /// Reason the draft cannot be submitted yet, if any.
    pub fn blocker(&self) -> Option<&'static str> {
        match self {
            Self::Select(draft) => draft.blocker(),
            Self::Vehicle(draft) => draft.blocker(),
            Self::Location(draft) => draft.blocker(),
            Self::Text(draft) => draft.blocker(),
        }
    }

    /// Whether the submit action should be enabled.
    pub fn is_submittable(&self) -> bool {
        self.blocker().is_none()
    }

    /// Validate against `question` and normalize into an answer.
    pub fn submission(&self, question: &Question) -> Result<Answer, DraftError> {
        if let Some(reason) = self.blocker() {
            return Err(DraftError::Invalid(reason));
        }

        match (self, question.kind()) {
            (Self::Select(draft), QuestionKind::SingleSelect(_)) => {
                let chosen = draft.chosen.as_deref().unwrap_or_default();
                let option = question
                    .option(chosen)
                    .ok_or_else(|| DraftError::UnknownOption(chosen.to_string()))?;
                Ok(Answer::new(option.value.clone(), option.label.clone()))
            }
            (Self::Vehicle(draft), QuestionKind::VehiclePicker(table)) => {
                if !table.years().contains(&draft.year) {
                    return Err(DraftError::UnknownOption(draft.year.clone()));
                }
                if !table.offers(&draft.make, &draft.model) {
                    return Err(DraftError::UnknownOption(format!(
                        "{} {}",
                        draft.make, draft.model
                    )));
                }
                let vehicle = VehicleAnswer {
                    year: draft.year.clone(),
                    make: draft.make.clone(),
                    model: draft.model.clone(),
                };
                Ok(Answer::new(serde_json::to_string(&vehicle)?, vehicle.display()))
            }
            (Self::Location(draft), QuestionKind::LocationPicker(states)) => {
                if !states.contains(&draft.state) {
                    return Err(DraftError::UnknownOption(draft.state.clone()));
                }
                let location = LocationAnswer {
                    state: draft.state.clone(),
                    zip: draft.zip.clone(),
                };
                Ok(Answer::new(
                    serde_json::to_string(&location)?,
                    location.display(),
                ))
            }
            (Self::Text(draft), QuestionKind::Text(variant)) if draft.variant == *variant => {
                Ok(Answer::plain(draft.value.clone()))
            }
            (draft, kind) => Err(DraftError::WrongKind {
                draft: draft.name(),
                question: kind.name(),
            }),
        }
    }
}

/// Single-select draft: which option was clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectDraft {
    chosen: Option<String>,
}

impl SelectDraft {
    pub fn choose(&mut self, option_id: impl Into<String>) {
        self.chosen = Some(option_id.into());
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    fn blocker(&self) -> Option<&'static str> {
        self.chosen.is_none().then_some("Choose an option")
    }
}

/// Year, make and model selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDraft {
    year: String,
    make: String,
    model: String,
}

impl VehicleDraft {
    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
    }

    /// Set the make. Model choices depend on the make, so the model resets.
    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
        self.model.clear();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn blocker(&self) -> Option<&'static str> {
        (self.year.is_empty() || self.make.is_empty() || self.model.is_empty())
            .then_some("Select a year, make and model")
    }
}

/// State select plus zip field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationDraft {
    state: String,
    zip: String,
}

impl LocationDraft {
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    /// Set the zip field, keeping at most five digits.
    pub fn set_zip(&mut self, input: &str) {
        self.zip = validation::digits_only(input, ZIP_DIGITS);
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    fn blocker(&self) -> Option<&'static str> {
        (self.state.is_empty() || !validation::is_valid_zip(&self.zip))
            .then_some("Select a state and enter a 5 digit zip code")
    }
}

/// One validated text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDraft {
    variant: TextVariant,
    value: String,
}

impl TextDraft {
    pub fn new(variant: TextVariant) -> Self {
        Self {
            variant,
            value: String::new(),
        }
    }

    /// Replace the field content. Phone numbers are re-formatted from their
    /// digits on every edit.
    pub fn set_value(&mut self, input: &str) {
        self.value = match self.variant {
            TextVariant::Phone => validation::format_phone(input),
            TextVariant::Email | TextVariant::Name => input.to_string(),
        };
    }

    pub fn variant(&self) -> TextVariant {
        self.variant
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn blocker(&self) -> Option<&'static str> {
        match self.variant {
            TextVariant::Email => (!validation::is_valid_email(&self.value))
                .then_some("Enter a valid email address"),
            TextVariant::Name => {
                (!validation::is_valid_name(&self.value)).then_some("Enter your full name")
            }
            TextVariant::Phone => (!validation::is_valid_phone(&self.value))
                .then_some("Enter a 10 digit phone number"),
        }
    }
}
