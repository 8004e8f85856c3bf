use core_types::StrategyMatrix;

/// The cross-quadrant recommendations.
///
/// The cells are fixed text and do not react to the computed indicators.
pub fn strategy_matrix() -> StrategyMatrix {
    StrategyMatrix {
        fo: lines(&[
            "Leverage innovation capacity to capture demand in the digital economy",
            "Take advantage of the demographic bonus by expanding quality programmes",
        ]),
        fa: lines(&[
            "Strengthen industry partnerships to reduce graduate unemployment",
            "Diversify funding sources in the face of economic volatility",
        ]),
        do_: lines(&[
            "Develop retention programmes that exploit the demographic window",
            "Improve graduation efficiency through flexible completion pathways",
        ]),
        da: lines(&[
            "Deploy an early-warning system for dropout and economic vulnerability",
            "Create emergency funds for students at risk during economic crises",
        ]),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
