//! Analysis workflow errors.

/// Conditions rejected by the analysis orchestrator before any model call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// Title was empty or whitespace
    #[display("Please enter a movie or series title")]
    EmptyTitle,
    /// Personnel name was empty or whitespace
    #[display("Please enter a name")]
    EmptyName,
    /// Operation requires a started run
    #[display("No analysis has been started")]
    NoActiveRun,
    /// Report requested before layer analyses settled
    #[display("Layer analyses are not complete yet")]
    LayersNotReady,
    /// Operation requires a generated report
    #[display("No summary report has been generated")]
    NoReport,
    /// Title choice made while no suggestions were pending
    #[display("No title suggestions are awaiting a choice")]
    NotAwaitingChoice,
    /// Suggestion index outside the offered list
    #[display("No title suggestion at position {}", _0)]
    UnknownSuggestion(usize),
    /// Budget was non-positive or non-finite
    #[display("Invalid budget: {}", _0)]
    InvalidBudget(String),
}

/// Analysis error with source location tracking.
///
/// # Examples
///
/// ```
/// use greybrainer_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::EmptyTitle);
/// assert!(format!("{}", err).contains("title"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The kind of error that occurred
    pub kind: AnalysisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
