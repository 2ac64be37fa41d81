use std::path::PathBuf;

use assignment_client::AssignmentError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SendResultsError>;

#[derive(Debug, Error)]
pub enum SendResultsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Type error: {0}")]
    Type(String),

    #[error("Submission of chunk {chunk} failed after {submitted} chunk(s) were accepted: {reason}")]
    Submission {
        chunk: usize,
        submitted: usize,
        reason: SubmissionFailure,
    },
}

/// Why the remote side did not accept a chunk.
#[derive(Debug, Error)]
pub enum SubmissionFailure {
    #[error(transparent)]
    Remote(AssignmentError),

    #[error("{0} (set ASSIGNMENT_INPUT_TYPE in the config file)")]
    InputType(AssignmentError),

    #[error("assignTeams returned an empty result ({0})")]
    EmptyResult(serde_json::Value),
}

impl From<AssignmentError> for SubmissionFailure {
    fn from(err: AssignmentError) -> Self {
        match err {
            err @ AssignmentError::InputType { .. } => SubmissionFailure::InputType(err),
            other => SubmissionFailure::Remote(other),
        }
    }
}
