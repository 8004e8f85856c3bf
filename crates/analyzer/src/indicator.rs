use analytics::{
    cagr, compound_projection, exponential_projection, linear_projection, linear_trend,
    standard_deviation,
};
use core_types::{AnalysisResult, Projection, TimeSeries, Trend};

/// How a growth rate is carried forward to the projection horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthModel {
    /// `latest · e^(rate · h)`
    Continuous,
    /// `latest · (1 + rate)^h`
    Compound,
}

/// Which trend measure an indicator is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// CAGR over the full span, projected with the given growth model.
    Growth(GrowthModel),
    /// OLS slope, projected linearly from the latest value.
    Slope,
}

/// Maps a measure (CAGR or slope) onto a qualitative trend.
///
/// Polarity belongs to the indicator, not the category: a rising dropout rate
/// and a rising demographic bonus share a sign but not a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendRule {
    /// `Positive` when the measure exceeds `threshold`, `otherwise` if not.
    HigherIsBetter { threshold: f64, otherwise: Trend },
    /// With `strict`, `Positive` only when the measure is below zero.
    /// Without it, `Negative` only when the measure is above zero.
    LowerIsBetter { strict: bool },
    /// Always the same label, whatever the measure says.
    Fixed(Trend),
}

impl TrendRule {
    pub fn classify(&self, measure: f64) -> Trend {
        match *self {
            TrendRule::HigherIsBetter { threshold, otherwise } => {
                if measure > threshold {
                    Trend::Positive
                } else {
                    otherwise
                }
            }
            TrendRule::LowerIsBetter { strict: true } => {
                if measure < 0.0 {
                    Trend::Positive
                } else {
                    Trend::Negative
                }
            }
            TrendRule::LowerIsBetter { strict: false } => {
                if measure > 0.0 {
                    Trend::Negative
                } else {
                    Trend::Positive
                }
            }
            TrendRule::Fixed(trend) => trend,
        }
    }
}

/// Figures computed for one series, handed to the text renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub first: f64,
    pub latest: f64,
    pub periods: usize,
    /// CAGR for the growth pattern, slope for the slope pattern.
    pub measure: f64,
    /// Population standard deviation of the whole series.
    pub volatility: f64,
}

pub type Renderer = fn(&Measurement) -> String;

/// One row of a quadrant's indicator table.
#[derive(Debug, Clone)]
pub struct IndicatorSpec {
    /// Stable identifier used for configuration overrides.
    pub key: &'static str,
    /// Display name, unique within its category.
    pub name: &'static str,
    pub series: TimeSeries,
    pub pattern: Pattern,
    pub rule: TrendRule,
    pub confidence: f64,
    formula: Renderer,
    interpretation: Renderer,
}

impl IndicatorSpec {
    pub fn new(
        key: &'static str,
        name: &'static str,
        series: impl Into<TimeSeries>,
        pattern: Pattern,
        rule: TrendRule,
        confidence: f64,
    ) -> Self {
        let formula: Renderer = match pattern {
            Pattern::Growth(_) => default_growth_formula,
            Pattern::Slope => default_slope_formula,
        };
        Self {
            key,
            name,
            series: series.into(),
            pattern,
            rule,
            confidence,
            formula,
            interpretation: default_interpretation,
        }
    }

    /// Replaces the generic formula and interpretation text.
    pub fn with_text(mut self, formula: Renderer, interpretation: Renderer) -> Self {
        self.formula = formula;
        self.interpretation = interpretation;
        self
    }

    /// Keeps the generic formula text and replaces only the interpretation.
    pub fn with_interpretation(mut self, interpretation: Renderer) -> Self {
        self.interpretation = interpretation;
        self
    }

    pub fn measure(&self) -> Measurement {
        let values = self.series.values();
        let first = self.series.first();
        let latest = self.series.latest();
        let periods = self.series.periods();

        let measure = match self.pattern {
            Pattern::Growth(_) => cagr(first, latest, periods as f64),
            Pattern::Slope => linear_trend(values).slope,
        };

        Measurement {
            first,
            latest,
            periods,
            measure,
            volatility: standard_deviation(values),
        }
    }

    pub fn evaluate(&self) -> AnalysisResult {
        let m = self.measure();

        let projection = match self.pattern {
            Pattern::Growth(GrowthModel::Continuous) => {
                Projection::from_horizons(|h| exponential_projection(m.latest, m.measure, h))
            }
            Pattern::Growth(GrowthModel::Compound) => {
                Projection::from_horizons(|h| compound_projection(m.latest, m.measure, h))
            }
            Pattern::Slope => {
                Projection::from_horizons(|h| linear_projection(m.latest, m.measure, h))
            }
        };

        AnalysisResult {
            indicator: self.name.to_string(),
            value: m.latest,
            trend: self.rule.classify(m.measure),
            formula: (self.formula)(&m),
            interpretation: (self.interpretation)(&m),
            projection,
            confidence: self.confidence,
        }
    }
}

fn default_growth_formula(m: &Measurement) -> String {
    format!(
        "CAGR = ({}/{})^(1/{}) - 1 = {:.2}%",
        m.latest,
        m.first,
        m.periods,
        m.measure * 100.0
    )
}

fn default_slope_formula(m: &Measurement) -> String {
    format!("y = mx + b, m = {:.4} per period", m.measure)
}

fn default_interpretation(m: &Measurement) -> String {
    format!("Latest value {} after {} periods", m.latest, m.periods)
}
