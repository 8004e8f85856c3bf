use core_types::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] analyzer::AnalyzerError),

    #[error("The {category} analyzer task did not complete: {reason}")]
    TaskFailed { category: Category, reason: String },

    #[error("No analyzer registered for '{0}'")]
    MissingAnalyzer(Category),

    #[error("More than one analyzer registered for '{0}'")]
    DuplicateAnalyzer(Category),
}
