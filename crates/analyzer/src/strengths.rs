//! Internal, favourable indicators.

use crate::indicator::{GrowthModel, IndicatorSpec, Measurement, Pattern, TrendRule};
use core_types::Trend;

pub fn indicators() -> Vec<IndicatorSpec> {
    vec![
        IndicatorSpec::new(
            "higher_education_investment",
            "Higher Education Investment",
            vec![15.2, 16.8, 18.5, 20.1, 22.3],
            Pattern::Growth(GrowthModel::Continuous),
            TrendRule::HigherIsBetter {
                threshold: 0.05,
                otherwise: Trend::Neutral,
            },
            0.85,
        )
        .with_interpretation(investment_interpretation),
        IndicatorSpec::new(
            "innovation_capacity_index",
            "Innovation Capacity Index",
            vec![0.45, 0.48, 0.52, 0.55, 0.58],
            Pattern::Growth(GrowthModel::Compound),
            TrendRule::HigherIsBetter {
                threshold: 0.0,
                otherwise: Trend::Neutral,
            },
            0.78,
        )
        .with_text(innovation_formula, innovation_interpretation),
    ]
}

fn investment_interpretation(m: &Measurement) -> String {
    format!(
        "Annual growth of {:.2}% indicates steady strengthening",
        m.measure * 100.0
    )
}

fn innovation_formula(_: &Measurement) -> String {
    "I_innovation = Σ(patents, publications, R&D) / academic_population".to_string()
}

fn innovation_interpretation(m: &Measurement) -> String {
    format!(
        "Index {} reflects a high capacity for knowledge generation",
        m.latest
    )
}
