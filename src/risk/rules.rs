//! Rule table turning carrier counts into a risk verdict.

use serde::{Deserialize, Serialize};

use super::CarrierRelative;

/// Verdict given when at least one first-degree relative carries the disease
pub const HIGH_RISK: &str = "High risk";

/// Verdict given when no rule matches
pub const LOW_RISK: &str = "Low risk";

/// One row of a risk rule table
///
/// Matches when at least `min_carriers` carrier relatives lie within
/// `max_generation` links of the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Furthest generation counted (1 = parents and children)
    pub max_generation: u32,
    /// Minimum number of carriers within that distance
    pub min_carriers: usize,
    /// Verdict given when the rule matches
    pub verdict: String,
}

impl RiskRule {
    /// Create a rule
    #[must_use]
    pub fn new(max_generation: u32, min_carriers: usize, verdict: impl Into<String>) -> Self {
        Self {
            max_generation,
            min_carriers,
            verdict: verdict.into(),
        }
    }

    /// Whether this rule matches the given carriers
    #[must_use]
    pub fn matches(&self, carriers: &[CarrierRelative]) -> bool {
        let within = carriers
            .iter()
            .filter(|carrier| carrier.generation <= self.max_generation)
            .count();
        within >= self.min_carriers
    }
}

/// Ordered risk rules with a fallback verdict
///
/// Rules are tried in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRuleTable {
    /// Rules in priority order
    pub rules: Vec<RiskRule>,
    /// Verdict when no rule matches
    pub fallback: String,
}

impl Default for RiskRuleTable {
    fn default() -> Self {
        Self {
            rules: vec![RiskRule::new(1, 1, HIGH_RISK)],
            fallback: LOW_RISK.to_string(),
        }
    }
}

impl RiskRuleTable {
    /// Create a table from rules and a fallback verdict
    #[must_use]
    pub fn new(rules: Vec<RiskRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The verdict for the given carriers
    #[must_use]
    pub fn verdict(&self, carriers: &[CarrierRelative]) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(carriers))
            .map_or(self.fallback.as_str(), |rule| rule.verdict.as_str())
    }
}
