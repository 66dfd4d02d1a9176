use serde::{Deserialize, Serialize};

/// One answer to one question, in machine-readable and display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Id of the answered question.
    pub question_id: String,

    /// Machine-readable value; may be a serialized structured value.
    pub raw_value: String,

    /// Text shown in the transcript.
    pub display_value: String,
}

impl Response {
    /// Create a response. An empty display value falls back to the raw value.
    pub fn new(
        question_id: impl Into<String>,
        raw_value: impl Into<String>,
        display_value: impl Into<String>,
    ) -> Self {
        let raw_value = raw_value.into();
        let mut display_value = display_value.into();
        if display_value.is_empty() {
            display_value = raw_value.clone();
        }
        Self {
            question_id: question_id.into(),
            raw_value,
            display_value,
        }
    }
}

/// Ordered answers, appended on answer and truncated from the tail on back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHistory {
    responses: Vec<Response>,
}

impl ResponseHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, response: Response) {
        self.responses.push(response);
    }

    pub(crate) fn pop(&mut self) -> Option<Response> {
        self.responses.pop()
    }

    /// Response at `index`.
    pub fn get(&self, index: usize) -> Option<&Response> {
        self.responses.get(index)
    }

    /// Most recent response.
    pub fn last(&self) -> Option<&Response> {
        self.responses.last()
    }

    /// Response for the given question id, if answered.
    pub fn find(&self, question_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.responses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Response> {
        self.responses.iter()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResponseHistory {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.iter()
    }
}

impl IntoIterator for ResponseHistory {
    type Item = Response;
    type IntoIter = std::vec::IntoIter<Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.into_iter()
    }
}

/// A completed response history, ready to hand to a lead sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub responses: Vec<Response>,
}

impl Lead {
    /// Raw value answered for `question_id`.
    pub fn raw_value(&self, question_id: &str) -> Option<&str> {
        self.responses
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| r.raw_value.as_str())
    }
}

impl From<ResponseHistory> for Lead {
    fn from(history: ResponseHistory) -> Self {
        Self {
            responses: history.responses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_display_falls_back_to_raw() {
        let response = Response::new("q5", "a@b.co", "");
        assert_eq!(response.display_value, "a@b.co");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let response = Response::new("q2", "<100k", "Less than 100k");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["questionId"], "q2");
        assert_eq!(json["rawValue"], "<100k");
        assert_eq!(json["displayValue"], "Less than 100k");
    }

    #[test]
    fn history_truncates_from_tail() {
        let mut history = ResponseHistory::new();
        history.push(Response::new("a", "1", "one"));
        history.push(Response::new("b", "2", "two"));
        assert_eq!(history.pop().map(|r| r.question_id), Some("b".to_string()));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|r| r.raw_value.as_str()), Some("1"));
        assert!(history.find("b").is_none());
    }

    #[test]
    fn lead_lookup() {
        let mut history = ResponseHistory::new();
        history.push(Response::new("email", "a@b.co", "a@b.co"));
        let lead = Lead::from(history);
        assert_eq!(lead.raw_value("email"), Some("a@b.co"));
        assert_eq!(lead.raw_value("phone"), None);
    }
}
