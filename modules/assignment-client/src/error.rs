use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssignmentError>;

#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("GraphQL input type `{input_type}` was rejected: {message}")]
    InputType { input_type: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response carried no data for {0}")]
    MissingData(&'static str),
}

impl From<reqwest::Error> for AssignmentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AssignmentError::Parse(err.to_string())
        } else {
            AssignmentError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AssignmentError {
    fn from(err: serde_json::Error) -> Self {
        AssignmentError::Parse(err.to_string())
    }
}
