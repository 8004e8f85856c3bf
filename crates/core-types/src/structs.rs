use crate::enums::{Category, HealthRating, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of periods ahead for each projection horizon.
pub const SHORT_TERM_PERIODS: u32 = 1;
pub const MEDIUM_TERM_PERIODS: u32 = 3;
pub const LONG_TERM_PERIODS: u32 = 5;

/// An ordered sequence of observations, one per period, oldest first.
///
/// Construction never fails. Degenerate series (empty, a single point,
/// non-positive values) are allowed and simply produce non-finite figures
/// once the formulas run over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The oldest observation, or NaN for an empty series.
    pub fn first(&self) -> f64 {
        self.values.first().copied().unwrap_or(f64::NAN)
    }

    /// The most recent observation, or NaN for an empty series.
    pub fn latest(&self) -> f64 {
        self.values.last().copied().unwrap_or(f64::NAN)
    }

    /// Number of elapsed periods between the first and latest observation.
    pub fn periods(&self) -> usize {
        self.values.len().saturating_sub(1)
    }
}

impl From<Vec<f64>> for TimeSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for TimeSeries {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Forward-looking values at +1, +3 and +5 periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub short_term: f64,
    pub medium_term: f64,
    pub long_term: f64,
}

impl Projection {
    /// Evaluates `project` at each horizon, passing the number of periods ahead.
    pub fn from_horizons<F>(project: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            short_term: project(f64::from(SHORT_TERM_PERIODS)),
            medium_term: project(f64::from(MEDIUM_TERM_PERIODS)),
            long_term: project(f64::from(LONG_TERM_PERIODS)),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.short_term.is_finite() && self.medium_term.is_finite() && self.long_term.is_finite()
    }
}

/// The computed output for one named indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub indicator: String,
    /// Latest observed value of the underlying series.
    pub value: f64,
    pub trend: Trend,
    pub formula: String,
    pub interpretation: String,
    pub projection: Projection,
    /// Author-assigned trust weight in [0, 1].
    pub confidence: f64,
}

impl AnalysisResult {
    /// Names of the numeric fields holding NaN or an infinity.
    ///
    /// Degenerate inputs are propagated rather than rejected, so this is how
    /// callers tell a well-formed result from a flagged one.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("value", self.value),
            ("projection.short_term", self.projection.short_term),
            ("projection.medium_term", self.projection.medium_term),
            ("projection.long_term", self.projection.long_term),
            ("confidence", self.confidence),
        ];
        checks
            .into_iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Aggregate for one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Confidence-weighted mean of the quadrant's latest values.
    pub score: f64,
    pub count: usize,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub strengths: CategoryScore,
    pub opportunities: CategoryScore,
    pub weaknesses: CategoryScore,
    pub threats: CategoryScore,
    pub competitiveness_ratio: f64,
    pub overall_health: HealthRating,
}

impl ReportSummary {
    pub fn score(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Strengths => &self.strengths,
            Category::Opportunities => &self.opportunities,
            Category::Weaknesses => &self.weaknesses,
            Category::Threats => &self.threats,
        }
    }
}

/// Per-quadrant result lists. A filtered report carries only one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<AnalysisResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunities: Option<Vec<AnalysisResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<AnalysisResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threats: Option<Vec<AnalysisResult>>,
}

impl ReportDetails {
    pub fn get(&self, category: Category) -> Option<&[AnalysisResult]> {
        let slot = match category {
            Category::Strengths => &self.strengths,
            Category::Opportunities => &self.opportunities,
            Category::Weaknesses => &self.weaknesses,
            Category::Threats => &self.threats,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, category: Category, results: Vec<AnalysisResult>) {
        *self.slot_mut(category) = Some(results);
    }

    /// Keeps only the given quadrant's list.
    pub fn only(mut self, category: Category) -> Self {
        let mut filtered = Self::default();
        *filtered.slot_mut(category) = self.slot_mut(category).take();
        filtered
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Vec<AnalysisResult>> {
        match category {
            Category::Strengths => &mut self.strengths,
            Category::Opportunities => &mut self.opportunities,
            Category::Weaknesses => &mut self.weaknesses,
            Category::Threats => &mut self.threats,
        }
    }
}

/// The four SWOT cross-combinations and their recommended actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMatrix {
    /// Strengths x Opportunities.
    #[serde(rename = "FO")]
    pub fo: Vec<String>,
    /// Strengths x Threats.
    #[serde(rename = "FA")]
    pub fa: Vec<String>,
    /// Weaknesses x Opportunities.
    #[serde(rename = "DO")]
    pub do_: Vec<String>,
    /// Weaknesses x Threats.
    #[serde(rename = "DA")]
    pub da: Vec<String>,
}

/// The complete output of one orchestration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicReport {
    pub timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    pub details: ReportDetails,
    pub strategies: StrategyMatrix,
}

impl StrategicReport {
    /// Restricts `details` to a single quadrant. `summary` and `strategies`
    /// are left untouched.
    pub fn filter_by(self, category: Category) -> Self {
        Self {
            details: self.details.only(category),
            ..self
        }
    }
}
