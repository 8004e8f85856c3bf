//! # FODA Category Analyzers
//!
//! This crate turns named time series into typed `AnalysisResult`s, one list per
//! SWOT quadrant. It defines a universal `CategoryAnalyzer` trait and a single
//! table-driven implementation configured four times.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on
//!   `core-types` and the `analytics` formula library.
//! - **Data over Code:** Quadrants differ only in their indicator tables
//!   (`strengths`, `opportunities`, `weaknesses`, `threats`). Each row picks a
//!   pattern, a trend rule and a confidence, so polarity is decided per indicator.
//! - **Concurrency Friendly:** Analyzers are immutable once built and only read
//!   their own series, which lets the orchestrator run them in parallel.
//!
//! ## Public API
//!
//! - `CategoryAnalyzer`: The core trait all analyzers implement.
//! - `QuadrantAnalyzer` and `IndicatorSpec`: The table-driven implementation.
//! - `create_analyzer` / `baseline_analyzers`: Factories for the baseline tables.

pub mod error;
pub mod factory;
pub mod indicator;
pub mod opportunities;
pub mod quadrant;
pub mod strengths;
pub mod threats;
pub mod weaknesses;

pub use error::AnalyzerError;
pub use factory::{baseline, baseline_analyzers, create_analyzer};
pub use indicator::{GrowthModel, IndicatorSpec, Measurement, Pattern, Renderer, TrendRule};
pub use quadrant::QuadrantAnalyzer;

use core_types::{AnalysisResult, Category, TimeSeries};

/// The contract shared by the four quadrant analyzers.
///
/// `analyze` must be deterministic and free of side effects. The `Send + Sync`
/// bounds let the orchestrator fan analyzers out across blocking tasks.
pub trait CategoryAnalyzer: Send + Sync {
    /// The quadrant whose results this analyzer produces.
    fn category(&self) -> Category;

    /// Computes one `AnalysisResult` per indicator.
    ///
    /// Degenerate input is not an error: it shows up as non-finite values in
    /// the returned results. `Err` is reserved for failures of whatever
    /// supplies the series.
    fn analyze(&self) -> Result<Vec<AnalysisResult>, AnalyzerError>;

    /// The named input series, used to fingerprint a run for caching.
    fn series(&self) -> Vec<(&str, &TimeSeries)>;
}
