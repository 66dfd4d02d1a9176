use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress grouping for a question, shown in the step indicator.
///
/// Categories are ordered: `Vehicle -> Coverage -> Location -> Quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vehicle,
    Coverage,
    Location,
    Quote,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Vehicle,
        Category::Coverage,
        Category::Location,
        Category::Quote,
    ];

    /// Label shown in the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Coverage => "Coverage",
            Self::Location => "Location",
            Self::Quote => "Your Quote",
        }
    }

    /// Zero-based position in [`Category::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Self::Vehicle => 0,
            Self::Coverage => 1,
            Self::Location => 2,
            Self::Quote => 3,
        }
    }

    /// Status of this category's step when `current` is the active category.
    pub fn status_relative_to(self, current: Category) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a step indicator entry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Active,
    Pending,
}

/// Every category paired with its status for the given active category.
pub fn step_statuses(current: Category) -> [(Category, StepStatus); 4] {
    Category::ALL.map(|category| (category, category.status_relative_to(current)))
}
