use thiserror::Error;

/// Failure of a forwarded page operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),
    #[error("graph api error (status {status}): {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },
    #[error("graph transport error: {0}")]
    Transport(String),
    #[error("unexpected graph response: {0}")]
    Decode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for GraphError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
