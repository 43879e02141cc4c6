use thiserror::Error;

/// Analysis-wide error type, consolidating the failure modes of the pipeline
/// into a single enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The transcript produced zero messages. This is the only error escalated
    /// to the caller; the pipeline halts before aggregation.
    #[error("Transcript contains no parsable messages")]
    EmptyTranscript,

    /// A message timestamp could not be resolved to a clock time. Non-fatal:
    /// the aggregator skips that message's histogram contribution.
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),
}
