use analytics::competitiveness_ratio;
use core_types::{
    AnalysisResult, Category, CategoryScore, HealthRating, ReportDetails, ReportSummary,
};

/// Confidence-weighted mean of the latest values, `Σ(value · confidence) / count`.
///
/// Values are not normalised across indicators, so quadrants with larger
/// native scales weigh more in the ratio. An empty list scores NaN.
pub fn category_score(category: Category, results: &[AnalysisResult]) -> CategoryScore {
    let weighted: f64 = results.iter().map(|r| r.value * r.confidence).sum();
    CategoryScore {
        score: weighted / results.len() as f64,
        count: results.len(),
        trend: category.summary_trend(),
    }
}

/// Aggregates the four quadrants into scores, the competitiveness ratio and
/// the health rating.
pub fn summarize(details: &ReportDetails) -> ReportSummary {
    let score = |category| category_score(category, details.get(category).unwrap_or(&[]));

    let strengths = score(Category::Strengths);
    let opportunities = score(Category::Opportunities);
    let weaknesses = score(Category::Weaknesses);
    let threats = score(Category::Threats);

    let ratio = competitiveness_ratio(
        strengths.score,
        opportunities.score,
        weaknesses.score,
        threats.score,
    );

    ReportSummary {
        strengths,
        opportunities,
        weaknesses,
        threats,
        competitiveness_ratio: ratio,
        overall_health: HealthRating::from_ratio(ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Projection, Trend};

    fn result(value: f64, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            indicator: format!("{value}"),
            value,
            trend: Trend::Neutral,
            formula: String::new(),
            interpretation: String::new(),
            projection: Projection::from_horizons(|_| value),
            confidence,
        }
    }

    #[test]
    fn score_is_confidence_weighted_mean() {
        let score = category_score(
            Category::Weaknesses,
            &[result(10.0, 0.5), result(4.0, 1.0)],
        );
        assert_eq!(score.score, 4.5);
        assert_eq!(score.count, 2);
        assert_eq!(score.trend, Trend::Negative);
    }

    #[test]
    fn empty_category_scores_nan() {
        let score = category_score(Category::Strengths, &[]);
        assert!(score.score.is_nan());
        assert_eq!(score.count, 0);
    }

    #[test]
    fn summary_ratio_and_health() {
        let mut details = ReportDetails::default();
        details.set(Category::Strengths, vec![result(2.0, 1.0)]);
        details.set(Category::Opportunities, vec![result(1.0, 1.0)]);
        details.set(Category::Weaknesses, vec![result(1.0, 1.0)]);
        details.set(Category::Threats, vec![result(1.0, 1.0)]);

        let summary = summarize(&details);
        assert_eq!(summary.competitiveness_ratio, 1.5);
        assert_eq!(summary.overall_health, HealthRating::Excellent);
        assert_eq!(summary.opportunities.trend, Trend::Positive);
        assert_eq!(summary.threats.trend, Trend::Negative);
    }

    #[test]
    fn missing_quadrant_rates_critical() {
        let mut details = ReportDetails::default();
        details.set(Category::Strengths, vec![result(2.0, 1.0)]);
        let summary = summarize(&details);
        assert!(summary.competitiveness_ratio.is_nan());
        assert_eq!(summary.overall_health, HealthRating::Critical);
    }
}
