//! # FODA Orchestration Engine
//!
//! Runs the four category analyzers, aggregates their results and assembles the
//! final `StrategicReport`.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Logic:** Depends on the `analyzer` and `analytics` crates and on
//!   `core-types`. Knows nothing about HTTP or configuration files.
//! - **Fan-out / Fan-in:** The analyzers share no mutable state, so each runs as
//!   its own blocking task and the orchestrator joins all four before aggregating.
//! - **All or Nothing:** Any analyzer failure aborts the run. A caller gets a
//!   complete report or an `EngineError`, never a partial report.
//! - **Stateless Core:** `Orchestrator` recomputes on every call. `CachedAnalysis`
//!   is the optional memoising wrapper around it.

use analyzer::{baseline_analyzers, CategoryAnalyzer};
use chrono::Utc;
use core_types::{Category, ReportDetails, StrategicReport};
use futures::future::join_all;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Instant;

pub mod cache;
pub mod error;
pub mod matrix;
pub mod scoring;

pub use cache::CachedAnalysis;
pub use error::EngineError;
pub use matrix::strategy_matrix;
pub use scoring::{category_score, summarize};

/// Coordinates one analyzer per quadrant.
#[derive(Clone)]
pub struct Orchestrator {
    analyzers: Vec<Arc<dyn CategoryAnalyzer>>,
}

impl Orchestrator {
    /// Builds an orchestrator from exactly one analyzer per quadrant.
    pub fn new(analyzers: Vec<Arc<dyn CategoryAnalyzer>>) -> Result<Self, EngineError> {
        for category in Category::ALL {
            match analyzers.iter().filter(|a| a.category() == category).count() {
                0 => return Err(EngineError::MissingAnalyzer(category)),
                1 => {}
                _ => return Err(EngineError::DuplicateAnalyzer(category)),
            }
        }
        let mut analyzers = analyzers;
        analyzers.sort_by_key(|a| a.category());
        Ok(Self { analyzers })
    }

    /// The reference indicator tables.
    pub fn baseline() -> Result<Self, EngineError> {
        Self::with_overrides(&HashMap::new())
    }

    /// The reference indicator tables with configured series swapped in by key.
    pub fn with_overrides(overrides: &HashMap<String, Vec<f64>>) -> Result<Self, EngineError> {
        let analyzers = baseline_analyzers(overrides)?
            .into_iter()
            .map(|a| Arc::new(a) as Arc<dyn CategoryAnalyzer>)
            .collect();
        Self::new(analyzers)
    }

    /// Replaces the analyzer for the quadrant `analyzer` reports.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn CategoryAnalyzer>) -> Self {
        let category = analyzer.category();
        if let Some(slot) = self.analyzers.iter_mut().find(|a| a.category() == category) {
            *slot = analyzer;
        }
        self
    }

    /// A hash of every input series, stable for identical inputs.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for analyzer in &self.analyzers {
            analyzer.category().hash(&mut hasher);
            for (key, series) in analyzer.series() {
                key.hash(&mut hasher);
                series.len().hash(&mut hasher);
                for value in series.values() {
                    value.to_bits().hash(&mut hasher);
                }
            }
        }
        hasher.finish()
    }

    /// Runs every analyzer and assembles the report.
    pub async fn run_full_analysis(&self) -> Result<StrategicReport, EngineError> {
        let started = Instant::now();

        // 1. Fan out
        let tasks = self.analyzers.iter().map(|analyzer| {
            let analyzer = Arc::clone(analyzer);
            tokio::task::spawn_blocking(move || analyzer.analyze())
        });

        // 2. Join
        let outcomes = join_all(tasks).await;
        let mut details = ReportDetails::default();
        for (analyzer, outcome) in self.analyzers.iter().zip(outcomes) {
            let category = analyzer.category();
            let results = outcome.map_err(|e| EngineError::TaskFailed {
                category,
                reason: e.to_string(),
            })??;
            details.set(category, results);
        }

        // 3. Aggregate
        let summary = summarize(&details);

        tracing::info!(
            ratio = summary.competitiveness_ratio,
            health = %summary.overall_health,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Strategic analysis complete."
        );

        Ok(StrategicReport {
            timestamp: Utc::now(),
            summary,
            details,
            strategies: strategy_matrix(),
        })
    }
}
