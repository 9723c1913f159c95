pub mod audio;
pub mod dto;
pub mod form;
pub mod session;

pub use audio::{data_uri, format_to_mime, mime_for_path};
pub use dto::{
    DesignVoiceRequest, DesignVoiceResponse, EnrollVoiceRequest, EnrollVoiceResponse, TtsRequest,
    TtsResponse,
};
pub use form::{AudioUpload, DesignForm, EnrollForm, SynthesisForm};
pub use session::ScopeSession;

pub const DEFAULT_DESIGN_MODEL: &str = "qwen3-tts-vd-realtime-2025-12-16";
pub const DEFAULT_ENROLL_MODEL: &str = "qwen3-tts-vc-realtime-2026-01-15";
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;
pub const DEFAULT_RESPONSE_FORMAT: &str = "wav";
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Output format requested from `/api/tts`; the player always receives WAV
pub const SYNTHESIS_FORMAT: &str = "wav";
