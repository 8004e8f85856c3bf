//! External, unfavourable indicators.

use crate::indicator::{GrowthModel, IndicatorSpec, Measurement, Pattern, TrendRule};
use core_types::Trend;

pub fn indicators() -> Vec<IndicatorSpec> {
    vec![
        IndicatorSpec::new(
            "economic_volatility",
            "Economic Volatility",
            vec![0.28, 0.32, 0.35, 0.38, 0.42],
            Pattern::Slope,
            TrendRule::LowerIsBetter { strict: false },
            0.68,
        )
        .with_text(volatility_formula, volatility_interpretation),
        // Graduate unemployment is always reported as a negative trend.
        IndicatorSpec::new(
            "graduate_unemployment",
            "Recent Graduate Unemployment",
            vec![8.5, 9.2, 10.1, 10.8, 11.5],
            Pattern::Growth(GrowthModel::Continuous),
            TrendRule::Fixed(Trend::Negative),
            0.72,
        )
        .with_text(unemployment_formula, unemployment_interpretation),
    ]
}

fn volatility_formula(m: &Measurement) -> String {
    format!("V = σ(inflation, exchange_rate, GDP) = {:.2}", m.latest)
}

fn volatility_interpretation(m: &Measurement) -> String {
    format!(
        "High volatility {:.2} (σ = {:.3} over {} periods) hinders strategic planning",
        m.latest, m.volatility, m.periods
    )
}

fn unemployment_formula(m: &Measurement) -> String {
    format!(
        "U_grad = Unemployed_graduates / Total_graduates * 100 = {}%",
        m.latest
    )
}

fn unemployment_interpretation(m: &Measurement) -> String {
    format!(
        "Unemployment of {}% affects the perceived quality of education",
        m.latest
    )
}
