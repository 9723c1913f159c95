use crate::domain::scope::Action;
use crate::domain::shared::Messages;
use crate::infrastructure::http::ApiError;

/// Why a flow attempt ended without a result
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("No audio file selected")]
    MissingAudioFile,

    #[error("Action already in progress: {0}")]
    ActionBusy(Action),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FlowError {
    /// Text shown in the scope's status line
    pub fn user_message(&self, messages: &Messages) -> String {
        match self {
            Self::MissingAudioFile => messages.missing_audio_file.to_string(),
            other => other.to_string(),
        }
    }
}

/// Custom result type for the flows
pub type FlowResult<T> = Result<T, FlowError>;
