use super::{
    DEFAULT_DESIGN_MODEL, DEFAULT_ENROLL_MODEL, DEFAULT_LANGUAGE, DEFAULT_RESPONSE_FORMAT,
    DEFAULT_SAMPLE_RATE,
};
use std::path::Path;

/// Input for the voice design flow
#[derive(Debug, Clone, PartialEq)]
pub struct DesignForm {
    pub voice_prompt: String,
    pub preview_text: String,
    pub preferred_name: String,
    pub language: String,
    pub target_model: String,
    pub sample_rate: u32,
    pub response_format: String,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            voice_prompt: String::new(),
            preview_text: String::new(),
            preferred_name: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            target_model: DEFAULT_DESIGN_MODEL.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            response_format: DEFAULT_RESPONSE_FORMAT.to_string(),
        }
    }
}

/// An audio file selected for enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AudioUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        Ok(Self { file_name, bytes })
    }
}

/// Input for the voice enrollment flow. `audio` is `None` until a file is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollForm {
    pub audio: Option<AudioUpload>,
    pub preferred_name: String,
    pub audio_mime_type: String,
    pub target_model: String,
}

impl Default for EnrollForm {
    fn default() -> Self {
        Self {
            audio: None,
            preferred_name: String::new(),
            audio_mime_type: super::audio::MIME_MPEG.to_string(),
            target_model: DEFAULT_ENROLL_MODEL.to_string(),
        }
    }
}

/// Input for either synthesis flow; the voice handle comes from the scope session
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisForm {
    pub text: String,
    pub model: String,
    pub sample_rate: u32,
}

impl SynthesisForm {
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}
