use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four quadrants of the strategic (SWOT / FODA) analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strengths,
    Opportunities,
    Weaknesses,
    Threats,
}

impl Category {
    /// All quadrants, in report order.
    pub const ALL: [Category; 4] = [
        Category::Strengths,
        Category::Opportunities,
        Category::Weaknesses,
        Category::Threats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strengths => "strengths",
            Category::Opportunities => "opportunities",
            Category::Weaknesses => "weaknesses",
            Category::Threats => "threats",
        }
    }

    /// Position of the quadrant inside `Category::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Category::Strengths => 0,
            Category::Opportunities => 1,
            Category::Weaknesses => 2,
            Category::Threats => 3,
        }
    }

    /// The fixed trend label reported next to the quadrant's aggregate score.
    pub fn summary_trend(&self) -> Trend {
        match self {
            Category::Strengths | Category::Opportunities => Trend::Positive,
            Category::Weaknesses | Category::Threats => Trend::Negative,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strengths" => Ok(Category::Strengths),
            "opportunities" => Ok(Category::Opportunities),
            "weaknesses" => Ok(Category::Weaknesses),
            "threats" => Ok(Category::Threats),
            other => Err(CoreError::InvalidInput(
                "category".to_string(),
                format!("'{}' is not one of strengths, opportunities, weaknesses, threats", other),
            )),
        }
    }
}

/// Qualitative direction of an indicator, already corrected for its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
            Trend::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Five-level ordinal rating derived from the competitiveness ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRating {
    Excellent,
    Good,
    Moderate,
    Weak,
    Critical,
}

impl HealthRating {
    /// Maps a competitiveness ratio onto the rating scale.
    ///
    /// Thresholds are checked top-down and the first match wins. A NaN ratio
    /// fails every comparison and therefore lands on `Critical`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.5 {
            HealthRating::Excellent
        } else if ratio >= 1.2 {
            HealthRating::Good
        } else if ratio >= 0.9 {
            HealthRating::Moderate
        } else if ratio >= 0.7 {
            HealthRating::Weak
        } else {
            HealthRating::Critical
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthRating::Excellent => "Excellent",
            HealthRating::Good => "Good",
            HealthRating::Moderate => "Moderate",
            HealthRating::Weak => "Weak",
            HealthRating::Critical => "Critical",
        };
        f.write_str(label)
    }
}
