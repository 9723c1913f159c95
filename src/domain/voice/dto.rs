use super::form::AudioUpload;
use serde::{Deserialize, Serialize};

/// Request for POST /api/design-voice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignVoiceRequest {
    pub api_key: String,
    pub voice_prompt: String,
    pub preview_text: String,
    pub preferred_name: String,
    pub language: String,
    pub target_model: String,
    pub sample_rate: u32,
    pub response_format: String,
}

/// Response for POST /api/design-voice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignVoiceResponse {
    #[serde(default)]
    pub voice: String,
    #[serde(default)]
    pub preview_audio_base64: Option<String>,
    #[serde(default)]
    pub preview_audio_format: Option<String>,
}

/// Multipart request for POST /api/enroll-voice
#[derive(Debug, Clone)]
pub struct EnrollVoiceRequest {
    pub api_key: String,
    pub audio: AudioUpload,
    pub preferred_name: String,
    pub audio_mime_type: String,
    pub target_model: String,
}

/// Response for POST /api/enroll-voice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrollVoiceResponse {
    #[serde(default)]
    pub voice: String,
}

/// Request for POST /api/tts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TtsRequest {
    pub api_key: String,
    pub voice: String,
    pub text: String,
    pub model: String,
    pub sample_rate: u32,
    pub format: String,
}

/// Response for POST /api/tts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TtsResponse {
    #[serde(default)]
    pub audio_base64: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}
