//! Submission failures

use thiserror::Error;

/// Why a create-order call did not produce a confirmation.
///
/// The UI shows the same message for every variant; the detail is kept for
/// the log and `SubmissionState::last_error_detail`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    /// The request could not be sent or no response arrived
    #[error("order service unreachable: {0}")]
    Transport(String),
    /// The service answered with a non-success status
    #[error("order service responded with status {status}: {detail}")]
    Backend { status: u16, detail: String },
    /// A success status with a body that is not a confirmation
    #[error("unreadable confirmation: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}
