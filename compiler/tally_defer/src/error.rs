use tally_diagnostic::ReportError;
use thiserror::Error;

/// Failure to materialize the final report.
#[derive(Debug, Error)]
pub enum FinalizeError {
    /// The report was already materialized by an earlier `finalize`.
    #[error("diagnostic report was already finalized")]
    AlreadyFinalized,
    /// The aggregator failed while rendering.
    #[error(transparent)]
    Report(#[from] ReportError),
}
