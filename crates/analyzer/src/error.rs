use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("Indicator '{indicator}' has confidence {confidence}, expected a value in [0, 1]")]
    InvalidConfidence { indicator: String, confidence: f64 },

    #[error("Indicator '{0}' is defined more than once in the same category")]
    DuplicateIndicator(String),

    #[error("No baseline indicator is registered under key '{0}'")]
    UnknownIndicator(String),

    #[error("Indicator source failed: {0}")]
    Source(String),
}
