/// Failure of a single request to the studio backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success status; `message` is the backend's `error` field or the fallback
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("Invalid upload: {0}")]
    InvalidForm(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
