use thiserror::Error;

/// Problems with the content of a single trial record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("hitting_times has {hitting_times} entries but targets has {targets}")]
    LengthMismatch { hitting_times: usize, targets: usize },

    #[error("expected a non-negative integer, found {0}")]
    NotAnInteger(String),
}
