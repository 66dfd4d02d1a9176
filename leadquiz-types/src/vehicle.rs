/// Reference data for a vehicle picker: selectable model years and an
/// ordered make -> models table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleTable {
    years: Vec<String>,
    makes: Vec<VehicleMake>,
}

/// One make and the models offered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleMake {
    pub name: String,
    pub models: Vec<String>,
}

impl VehicleMake {
    pub fn new<I, S>(name: impl Into<String>, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            models: models.into_iter().map(Into::into).collect(),
        }
    }
}

impl VehicleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the model years from `newest` counting down, `count` entries.
    pub fn with_year_span(mut self, newest: u16, count: u16) -> Self {
        self.years = (0..count)
            .filter_map(|offset| newest.checked_sub(offset))
            .map(|year| year.to_string())
            .collect();
        self
    }

    /// Add a make with its models. Makes keep insertion order.
    pub fn with_make<I, S>(mut self, name: impl Into<String>, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.makes.push(VehicleMake::new(name, models));
        self
    }

    /// Selectable years, newest first.
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// All makes in table order.
    pub fn makes(&self) -> impl Iterator<Item = &str> {
        self.makes.iter().map(|m| m.name.as_str())
    }

    /// Number of makes in the table.
    pub fn make_count(&self) -> usize {
        self.makes.len()
    }

    /// Models offered for `make`. Unknown makes have no models.
    pub fn models(&self, make: &str) -> &[String] {
        self.makes
            .iter()
            .find(|m| m.name == make)
            .map(|m| m.models.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `model` is offered for `make`.
    pub fn offers(&self, make: &str, model: &str) -> bool {
        self.models(make).iter().any(|m| m == model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> VehicleTable {
        VehicleTable::new()
            .with_year_span(2025, 3)
            .with_make("Tesla", ["Model 3", "Model Y"])
            .with_make("Toyota", ["Camry", "RAV4"])
    }

    #[test]
    fn years_count_down() {
        assert_eq!(table().years(), ["2025", "2024", "2023"]);
    }

    #[test]
    fn models_are_filtered_by_make() {
        let table = table();
        assert_eq!(table.models("Toyota"), ["Camry", "RAV4"]);
        assert!(table.offers("Tesla", "Model 3"));
        assert!(!table.offers("Toyota", "Model 3"));
        assert!(table.models("Yugo").is_empty());
    }

    #[test]
    fn makes_keep_order() {
        let makes: Vec<_> = table().makes().map(str::to_string).collect();
        assert_eq!(makes, vec!["Tesla", "Toyota"]);
    }
}
