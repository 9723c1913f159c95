pub mod client;
pub mod error;

pub use client::{VoiceStudioApi, VoiceStudioClient};
pub use error::ApiError;

pub const DESIGN_VOICE_ENDPOINT: &str = "/api/design-voice";
pub const ENROLL_VOICE_ENDPOINT: &str = "/api/enroll-voice";
pub const TTS_ENDPOINT: &str = "/api/tts";
