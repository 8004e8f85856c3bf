use crate::error::AnalyzerError;
use crate::indicator::IndicatorSpec;
use crate::CategoryAnalyzer;
use core_types::{AnalysisResult, Category, TimeSeries};
use std::collections::HashSet;

/// A category analyzer driven entirely by its indicator table.
///
/// All four quadrants share this type; they differ only in the rows they are
/// built with.
#[derive(Debug, Clone)]
pub struct QuadrantAnalyzer {
    category: Category,
    indicators: Vec<IndicatorSpec>,
}

impl QuadrantAnalyzer {
    /// Builds an analyzer after checking that every confidence lies in [0, 1]
    /// and that display names are unique.
    pub fn new(category: Category, indicators: Vec<IndicatorSpec>) -> Result<Self, AnalyzerError> {
        let mut names = HashSet::new();
        for spec in &indicators {
            if !(0.0..=1.0).contains(&spec.confidence) {
                return Err(AnalyzerError::InvalidConfidence {
                    indicator: spec.name.to_string(),
                    confidence: spec.confidence,
                });
            }
            if !names.insert(spec.name) {
                return Err(AnalyzerError::DuplicateIndicator(spec.name.to_string()));
            }
        }

        Ok(Self {
            category,
            indicators,
        })
    }

    /// Swaps in a new series for the indicator registered under `key`.
    /// Returns `false` when this quadrant has no such indicator.
    pub fn replace_series(&mut self, key: &str, series: TimeSeries) -> bool {
        match self.indicators.iter_mut().find(|spec| spec.key == key) {
            Some(spec) => {
                spec.series = series;
                true
            }
            None => false,
        }
    }
}

impl CategoryAnalyzer for QuadrantAnalyzer {
    fn category(&self) -> Category {
        self.category
    }

    fn analyze(&self) -> Result<Vec<AnalysisResult>, AnalyzerError> {
        let results: Vec<AnalysisResult> = self
            .indicators
            .iter()
            .map(|spec| {
                let result = spec.evaluate();
                let degenerate = result.non_finite_fields();
                if !degenerate.is_empty() {
                    tracing::warn!(
                        category = %self.category,
                        indicator = spec.key,
                        fields = ?degenerate,
                        "Indicator produced non-finite values."
                    );
                }
                result
            })
            .collect();

        tracing::debug!(category = %self.category, count = results.len(), "Category analyzed.");
        Ok(results)
    }

    fn series(&self) -> Vec<(&str, &TimeSeries)> {
        self.indicators
            .iter()
            .map(|spec| (spec.key, &spec.series))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::{Pattern, TrendRule};
    use core_types::Trend;

    fn spec(key: &'static str, name: &'static str, confidence: f64) -> IndicatorSpec {
        IndicatorSpec::new(
            key,
            name,
            vec![1.0, 2.0, 3.0],
            Pattern::Slope,
            TrendRule::HigherIsBetter {
                threshold: 0.0,
                otherwise: Trend::Negative,
            },
            confidence,
        )
    }

    #[test]
    fn rejects_confidence_outside_unit_interval() {
        for confidence in [-0.1, 1.01, f64::NAN] {
            let err = QuadrantAnalyzer::new(Category::Strengths, vec![spec("a", "A", confidence)])
                .unwrap_err();
            assert!(matches!(err, AnalyzerError::InvalidConfidence { .. }));
        }
        assert!(QuadrantAnalyzer::new(Category::Strengths, vec![spec("a", "A", 1.0)]).is_ok());
        assert!(QuadrantAnalyzer::new(Category::Strengths, vec![spec("a", "A", 0.0)]).is_ok());
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = QuadrantAnalyzer::new(
            Category::Threats,
            vec![spec("a", "Same", 0.5), spec("b", "Same", 0.5)],
        )
        .unwrap_err();
        assert_eq!(err, AnalyzerError::DuplicateIndicator("Same".to_string()));
    }

    #[test]
    fn analyze_keeps_table_order() {
        let analyzer = QuadrantAnalyzer::new(
            Category::Opportunities,
            vec![spec("a", "First", 0.5), spec("b", "Second", 0.6)],
        )
        .unwrap();
        let results = analyzer.analyze().unwrap();
        let names: Vec<_> = results.iter().map(|r| r.indicator.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(analyzer.category(), Category::Opportunities);
    }

    #[test]
    fn replace_series_by_key() {
        let mut analyzer =
            QuadrantAnalyzer::new(Category::Weaknesses, vec![spec("rate", "Rate", 0.5)]).unwrap();
        assert!(analyzer.replace_series("rate", TimeSeries::new(vec![5.0, 4.0])));
        assert!(!analyzer.replace_series("missing", TimeSeries::new(vec![1.0])));

        let results = analyzer.analyze().unwrap();
        assert_eq!(results[0].value, 4.0);
        assert_eq!(results[0].trend, Trend::Negative);
        assert_eq!(analyzer.series()[0].1.values(), &[5.0, 4.0]);
    }
}
