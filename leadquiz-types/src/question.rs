use crate::{Category, VehicleTable};

/// A single question in the quiz catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique id within the catalog; responses reference it.
    id: String,

    /// The prompt text shown to the user.
    text: String,

    /// Secondary line shown under the prompt.
    sub_text: Option<String>,

    /// Hint shown in an empty text field.
    placeholder: Option<String>,

    /// Legal text shown under the input surface.
    disclaimer: Option<String>,

    /// The kind of question (determines the input surface).
    kind: QuestionKind,

    /// Step indicator grouping.
    category: Category,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        kind: QuestionKind,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sub_text: None,
            placeholder: None,
            disclaimer: None,
            kind,
            category,
        }
    }

    /// A single-select question; picking an option answers it immediately.
    pub fn single_select(
        id: impl Into<String>,
        text: impl Into<String>,
        category: Category,
        options: Vec<QuizOption>,
    ) -> Self {
        Self::new(id, text, QuestionKind::SingleSelect(options), category)
    }

    /// A year / make / model picker.
    pub fn vehicle(
        id: impl Into<String>,
        text: impl Into<String>,
        category: Category,
        table: VehicleTable,
    ) -> Self {
        Self::new(id, text, QuestionKind::VehiclePicker(table), category)
    }

    /// A state / zip picker.
    pub fn location<I, S>(
        id: impl Into<String>,
        text: impl Into<String>,
        category: Category,
        states: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let states = states.into_iter().map(Into::into).collect();
        Self::new(id, text, QuestionKind::LocationPicker(states), category)
    }

    /// A single validated text field.
    pub fn text_input(
        id: impl Into<String>,
        text: impl Into<String>,
        category: Category,
        variant: TextVariant,
    ) -> Self {
        Self::new(id, text, QuestionKind::Text(variant), category)
    }

    /// Set the secondary line.
    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        self.sub_text = Some(sub_text.into());
        self
    }

    /// Set the empty-field hint.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the disclaimer.
    pub fn with_disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = Some(disclaimer.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sub_text(&self) -> Option<&str> {
        self.sub_text.as_deref()
    }

    /// The configured placeholder, or the stock hint for text fields.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref().or(match &self.kind {
            QuestionKind::Text(variant) => Some(variant.default_placeholder()),
            _ => None,
        })
    }

    pub fn disclaimer(&self) -> Option<&str> {
        self.disclaimer.as_deref()
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Options of a single-select question; empty for every other kind.
    pub fn options(&self) -> &[QuizOption] {
        match &self.kind {
            QuestionKind::SingleSelect(options) => options,
            _ => &[],
        }
    }

    /// Look up a single-select option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options().iter().find(|o| o.id == option_id)
    }
}

/// The kind of question, determining the input surface and validation.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick one option; the pick is the answer.
    SingleSelect(Vec<QuizOption>),

    /// Year, make and model selects; model choices depend on the make.
    VehiclePicker(VehicleTable),

    /// State select plus a five digit zip code.
    LocationPicker(Vec<String>),

    /// One validated text field.
    Text(TextVariant),
}

impl QuestionKind {
    /// Short name used in log lines and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleSelect(_) => "single-select",
            Self::VehiclePicker(_) => "vehicle-picker",
            Self::LocationPicker(_) => "location-picker",
            Self::Text(variant) => variant.name(),
        }
    }

    /// Whether choosing an option answers the question with no submit step.
    pub fn answers_on_select(&self) -> bool {
        matches!(self, Self::SingleSelect(_))
    }
}

/// Validation flavor of a text question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    Email,
    Name,
    Phone,
}

impl TextVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }

    fn default_placeholder(self) -> &'static str {
        match self {
            Self::Email => "name@example.com",
            Self::Name => "John Doe",
            Self::Phone => "(555) 555-5555",
        }
    }
}

/// A choice in a single-select question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    /// Stable id, unique within the question.
    pub id: String,

    /// Human-readable label, used as the display value.
    pub label: String,

    /// Machine-readable value, used as the raw value.
    pub value: String,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lookup() {
        let q = Question::single_select(
            "miles",
            "How many miles?",
            Category::Vehicle,
            vec![
                QuizOption::new("lt100", "Less than 100k", "<100k"),
                QuizOption::new("gt200", "More than 200k", ">200k"),
            ],
        );
        assert_eq!(q.option("gt200").map(|o| o.value.as_str()), Some(">200k"));
        assert!(q.option("nope").is_none());
        assert!(q.kind().answers_on_select());
    }

    #[test]
    fn text_questions_fall_back_to_stock_placeholder() {
        let q = Question::text_input("email", "Email?", Category::Quote, TextVariant::Email);
        assert_eq!(q.placeholder(), Some("name@example.com"));

        let q = q.with_placeholder("example@email.com");
        assert_eq!(q.placeholder(), Some("example@email.com"));
    }

    #[test]
    fn non_select_questions_have_no_options() {
        let q = Question::location("loc", "State?", Category::Location, ["TX"]);
        assert!(q.options().is_empty());
        assert_eq!(q.kind().name(), "location-picker");
        assert!(q.placeholder().is_none());
    }
}
