use serde::{Deserialize, Serialize};

/// A normalized answer, ready to be recorded as a [`Response`](crate::Response).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Machine-readable value.
    pub raw_value: String,

    /// Human-readable value for the transcript.
    pub display_value: String,
}

impl Answer {
    pub fn new(raw_value: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            display_value: display_value.into(),
        }
    }

    /// An answer whose display form is the raw value itself.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            display_value: value.clone(),
            raw_value: value,
        }
    }
}

/// Structured raw value of a vehicle picker answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAnswer {
    pub year: String,
    pub make: String,
    pub model: String,
}

impl VehicleAnswer {
    /// `"<year> <make> <model>"`.
    pub fn display(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Parse the raw value recorded for a vehicle question.
    pub fn from_raw(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Structured raw value of a location picker answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAnswer {
    pub state: String,
    pub zip: String,
}

impl LocationAnswer {
    /// `"<state>, <zip>"`.
    pub fn display(&self) -> String {
        format!("{}, {}", self.state, self.zip)
    }

    /// Parse the raw value recorded for a location question.
    pub fn from_raw(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_raw_value_is_json_object() {
        let vehicle = VehicleAnswer {
            year: "2020".into(),
            make: "Toyota".into(),
            model: "Camry".into(),
        };
        let raw = serde_json::to_string(&vehicle).unwrap();
        assert_eq!(raw, r#"{"year":"2020","make":"Toyota","model":"Camry"}"#);
        assert_eq!(VehicleAnswer::from_raw(&raw).unwrap(), vehicle);
        assert_eq!(vehicle.display(), "2020 Toyota Camry");
    }

    #[test]
    fn location_display() {
        let location = LocationAnswer {
            state: "TX".into(),
            zip: "78704".into(),
        };
        assert_eq!(location.display(), "TX, 78704");
        assert!(LocationAnswer::from_raw("not json").is_err());
    }

    #[test]
    fn plain_answer_mirrors_value() {
        let answer = Answer::plain("John Doe");
        assert_eq!(answer.raw_value, answer.display_value);
    }
}
