use crate::error::AnalyzerError;
use crate::quadrant::QuadrantAnalyzer;
use crate::{opportunities, strengths, threats, weaknesses, CategoryAnalyzer};
use core_types::{Category, TimeSeries};
use std::collections::HashMap;

/// Builds the baseline analyzer for one quadrant.
pub fn baseline(category: Category) -> Result<QuadrantAnalyzer, AnalyzerError> {
    // Exhaustive on purpose: a new `Category` must get an indicator table here.
    let indicators = match category {
        Category::Strengths => strengths::indicators(),
        Category::Opportunities => opportunities::indicators(),
        Category::Weaknesses => weaknesses::indicators(),
        Category::Threats => threats::indicators(),
    };
    QuadrantAnalyzer::new(category, indicators)
}

/// Creates a new analyzer instance for the given quadrant.
pub fn create_analyzer(category: Category) -> Result<Box<dyn CategoryAnalyzer>, AnalyzerError> {
    Ok(Box::new(baseline(category)?))
}

/// Builds all four baseline analyzers, in `Category::ALL` order, with any
/// configured series swapped in by indicator key.
pub fn baseline_analyzers(
    overrides: &HashMap<String, Vec<f64>>,
) -> Result<Vec<QuadrantAnalyzer>, AnalyzerError> {
    let mut analyzers = Category::ALL
        .iter()
        .map(|category| baseline(*category))
        .collect::<Result<Vec<_>, _>>()?;

    for (key, values) in overrides {
        let series = TimeSeries::new(values.clone());
        let applied = analyzers
            .iter_mut()
            .any(|analyzer| analyzer.replace_series(key, series.clone()));
        if !applied {
            return Err(AnalyzerError::UnknownIndicator(key.clone()));
        }
        tracing::info!(indicator = %key, points = values.len(), "Using configured series.");
    }

    Ok(analyzers)
}
