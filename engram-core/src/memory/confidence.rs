use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse bucketing of a fused relevance score for downstream display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// Fused scores at or above this are High.
    pub const HIGH: f64 = 0.75;
    /// Fused scores at or above this (and below [`Self::HIGH`]) are Medium.
    pub const MEDIUM: f64 = 0.5;

    /// Band for a fused score.
    pub fn from_score(fused_score: f64) -> Self {
        if fused_score >= Self::HIGH {
            Self::High
        } else if fused_score >= Self::MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds_are_exact() {
        assert_eq!(ConfidenceBand::from_score(0.8), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_score(0.75), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_score(0.7499), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_score(0.5), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_score(0.4999), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_score(0.0), ConfidenceBand::Low);
    }
}
