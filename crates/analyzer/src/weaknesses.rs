//! Internal, unfavourable indicators.

use crate::indicator::{GrowthModel, IndicatorSpec, Measurement, Pattern, TrendRule};
use core_types::Trend;

pub fn indicators() -> Vec<IndicatorSpec> {
    vec![
        IndicatorSpec::new(
            "dropout_rate",
            "Dropout Rate",
            vec![18.2, 17.5, 16.8, 16.2, 15.8],
            Pattern::Slope,
            TrendRule::LowerIsBetter { strict: true },
            0.82,
        )
        .with_text(dropout_formula, dropout_interpretation),
        IndicatorSpec::new(
            "graduation_efficiency",
            "Graduation Efficiency",
            vec![0.42, 0.44, 0.46, 0.47, 0.48],
            Pattern::Growth(GrowthModel::Compound),
            TrendRule::HigherIsBetter {
                threshold: 0.0,
                otherwise: Trend::Negative,
            },
            0.76,
        )
        .with_text(graduation_formula, graduation_interpretation),
    ]
}

fn dropout_formula(m: &Measurement) -> String {
    format!(
        "D = (Students_dropping_out / Total_enrolled) * 100 = {}%",
        m.latest
    )
}

fn dropout_interpretation(m: &Measurement) -> String {
    format!("Dropout of {}% calls for retention strategies", m.latest)
}

fn graduation_formula(m: &Measurement) -> String {
    format!(
        "GE = On_time_graduates / Entry_cohort = {:.1}%",
        m.latest * 100.0
    )
}

fn graduation_interpretation(m: &Measurement) -> String {
    format!(
        "Only {:.1}% graduate on time, improvement required",
        m.latest * 100.0
    )
}
