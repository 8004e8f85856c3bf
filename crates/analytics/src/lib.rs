//! # FODA Analytics
//!
//! The formula library behind every indicator in the strategic analysis.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate with no dependencies. It knows
//!   nothing about categories, analyzers or reports.
//! - **Silent Degradation:** Formulas never panic or return errors. Degenerate
//!   input produces NaN or an infinity, and guarding against it is the caller's job.
//!
//! ## Public API
//!
//! - `formulas`: CAGR, weighted moving average, standard deviation, linear trend,
//!   composite index, the three projection models and the competitiveness ratio.
//! - `LinearTrend`: Slope and intercept returned by `linear_trend`.

pub mod formulas;

pub use formulas::{
    cagr, competitiveness_ratio, composite_index, compound_projection, exponential_projection,
    linear_projection, linear_trend, standard_deviation, weighted_moving_average, LinearTrend,
};
