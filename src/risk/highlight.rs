//! Disease highlighting: which patients carry any or all of a disease set.

use serde::{Deserialize, Serialize};

/// How a patient's diseases are matched against a highlighted set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Inclusive: carry at least one highlighted disease
    #[default]
    Any,
    /// Exclusive: carry every highlighted disease
    All,
}

impl HighlightMode {
    /// Whether a patient carrying `carried` matches `highlighted`
    ///
    /// An empty highlighted set matches nobody in `Any` mode and everybody
    /// in `All` mode.
    #[must_use]
    pub fn matches<C, H>(self, carried: &[C], highlighted: &[H]) -> bool
    where
        C: AsRef<str>,
        H: AsRef<str>,
    {
        let carries = |wanted: &H| carried.iter().any(|have| have.as_ref() == wanted.as_ref());
        match self {
            Self::Any => highlighted.iter().any(carries),
            Self::All => highlighted.iter().all(carries),
        }
    }

    /// The question a highlight answers, as shown next to each node
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Carries at least one?",
            Self::All => "Carries all?",
        }
    }
}

impl std::str::FromStr for HighlightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "inclusive" => Ok(Self::Any),
            "all" | "exclusive" => Ok(Self::All),
            other => Err(format!("unknown highlight mode '{other}'")),
        }
    }
}

/// Highlight classification of one patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMatch {
    /// The patient
    pub patient_id: String,
    /// Whether the patient matches the highlighted set
    pub matched: bool,
}
