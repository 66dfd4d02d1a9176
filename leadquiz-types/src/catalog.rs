use std::collections::HashSet;

use crate::{Question, QuestionKind};

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no questions")]
    Empty,

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Question '{0}' has no options")]
    NoOptions(String),

    #[error("Question '{question_id}' has duplicate option {field} '{value}'")]
    DuplicateOption {
        question_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Vehicle picker '{0}' needs at least one year, one make, and models for every make")]
    EmptyVehicleTable(String),

    #[error("Location picker '{0}' has no states")]
    NoStates(String),
}

/// The fixed, ordered list of questions presented to every user.
///
/// A catalog is validated once when built and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Optional message shown on the welcome screen.
    prelude: Option<String>,

    /// All questions in presentation order.
    questions: Vec<Question>,

    /// Optional message shown once the last question is answered.
    epilogue: Option<String>,
}

impl Catalog {
    /// Build a catalog, checking ids and option lists.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        for question in &questions {
            if !ids.insert(question.id()) {
                return Err(CatalogError::DuplicateQuestion(question.id().to_string()));
            }
            check_kind(question)?;
        }

        Ok(Self {
            prelude: None,
            questions,
            epilogue: None,
        })
    }

    /// Set the welcome message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the completion message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    pub fn prelude(&self) -> Option<&str> {
        self.prelude.as_deref()
    }

    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by id. Linear scan; catalogs are small.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Position of the question with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Index of the final question.
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

fn check_kind(question: &Question) -> Result<(), CatalogError> {
    let id = question.id();
    match question.kind() {
        QuestionKind::SingleSelect(options) => {
            if options.is_empty() {
                return Err(CatalogError::NoOptions(id.to_string()));
            }
            let mut option_ids = HashSet::new();
            let mut values = HashSet::new();
            for option in options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question_id: id.to_string(),
                        field: "id",
                        value: option.id.clone(),
                    });
                }
                if !values.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question_id: id.to_string(),
                        field: "value",
                        value: option.value.clone(),
                    });
                }
            }
        }
        QuestionKind::VehiclePicker(table) => {
            let empty_make = table.makes().any(|make| table.models(make).is_empty());
            if table.years().is_empty() || table.make_count() == 0 || empty_make {
                return Err(CatalogError::EmptyVehicleTable(id.to_string()));
            }
        }
        QuestionKind::LocationPicker(states) => {
            if states.is_empty() {
                return Err(CatalogError::NoStates(id.to_string()));
            }
        }
        QuestionKind::Text(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, QuizOption, TextVariant, VehicleTable};

    fn name_question(id: &str) -> Question {
        Question::text_input(id, "Name?", Category::Quote, TextVariant::Name)
    }

    #[test]
    fn lookup_by_index_and_id() {
        let catalog = Catalog::new(vec![name_question("a"), name_question("b")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(Question::id), Some("b"));
        assert!(catalog.get(2).is_none());
        assert_eq!(catalog.find("a").map(Question::id), Some("a"));
        assert_eq!(catalog.index_of("b"), Some(1));
        assert_eq!(catalog.last_index(), 1);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![name_question("a"), name_question("a")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateQuestion("a".into()));
    }

    #[test]
    fn rejects_duplicate_option_values() {
        let q = Question::single_select(
            "q",
            "Pick",
            Category::Coverage,
            vec![
                QuizOption::new("one", "One", "same"),
                QuizOption::new("two", "Two", "same"),
            ],
        );
        let err = Catalog::new(vec![q]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateOption { field: "value", .. }
        ));
    }

    #[test]
    fn rejects_select_without_options() {
        let q = Question::single_select("q", "Pick", Category::Coverage, Vec::new());
        assert_eq!(
            Catalog::new(vec![q]).unwrap_err(),
            CatalogError::NoOptions("q".into())
        );
    }

    #[test]
    fn rejects_empty_pickers() {
        let vehicle = Question::vehicle("v", "Car?", Category::Vehicle, VehicleTable::new());
        assert_eq!(
            Catalog::new(vec![vehicle]).unwrap_err(),
            CatalogError::EmptyVehicleTable("v".into())
        );

        let location = Question::location("l", "State?", Category::Location, Vec::<String>::new());
        assert_eq!(
            Catalog::new(vec![location]).unwrap_err(),
            CatalogError::NoStates("l".into())
        );
    }

    #[test]
    fn rejects_make_without_models() {
        let table = VehicleTable::new()
            .with_year_span(2025, 5)
            .with_make("Toyota", ["Camry"])
            .with_make("Tesla", Vec::<String>::new());
        let vehicle = Question::vehicle("v", "Car?", Category::Vehicle, table);
        assert_eq!(
            Catalog::new(vec![vehicle]).unwrap_err(),
            CatalogError::EmptyVehicleTable("v".into())
        );
    }

    #[test]
    fn prelude_and_epilogue() {
        let catalog = Catalog::new(vec![name_question("a")])
            .unwrap()
            .with_prelude("Welcome")
            .with_epilogue("Thanks");
        assert_eq!(catalog.prelude(), Some("Welcome"));
        assert_eq!(catalog.epilogue(), Some("Thanks"));
    }
}
