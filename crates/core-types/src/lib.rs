pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Category, HealthRating, Trend};
pub use error::CoreError;
pub use structs::{
    AnalysisResult, CategoryScore, Projection, ReportDetails, ReportSummary, StrategicReport,
    StrategyMatrix, TimeSeries, LONG_TERM_PERIODS, MEDIUM_TERM_PERIODS, SHORT_TERM_PERIODS,
};
