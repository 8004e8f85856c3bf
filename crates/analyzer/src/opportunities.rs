//! External, favourable indicators.

use crate::indicator::{GrowthModel, IndicatorSpec, Measurement, Pattern, TrendRule};
use core_types::Trend;

pub fn indicators() -> Vec<IndicatorSpec> {
    vec![
        IndicatorSpec::new(
            "demographic_bonus",
            "Demographic Bonus",
            vec![0.65, 0.68, 0.70, 0.71, 0.72],
            Pattern::Slope,
            TrendRule::HigherIsBetter {
                threshold: 0.0,
                otherwise: Trend::Negative,
            },
            0.92,
        )
        .with_text(demographic_formula, demographic_interpretation),
        // Demand is labelled positive whatever its growth rate does.
        IndicatorSpec::new(
            "digital_talent_demand",
            "Digital Talent Demand Growth",
            vec![1200.0, 1450.0, 1780.0, 2180.0, 2650.0],
            Pattern::Growth(GrowthModel::Continuous),
            TrendRule::Fixed(Trend::Positive),
            0.88,
        )
        .with_text(digital_formula, digital_interpretation),
    ]
}

fn demographic_formula(m: &Measurement) -> String {
    format!("DB = (Population 15-64) / Total_population = {}", m.latest)
}

fn demographic_interpretation(m: &Measurement) -> String {
    format!(
        "{:.1}% of the population in working age represents a window of opportunity",
        m.latest * 100.0
    )
}

fn digital_formula(m: &Measurement) -> String {
    format!("CAGR_digital = {:.2}% annual", m.measure * 100.0)
}

fn digital_interpretation(m: &Measurement) -> String {
    format!(
        "Demand for technology profiles growing {:.2}% per year",
        m.measure * 100.0
    )
}
