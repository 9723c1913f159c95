use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;

pub const MIME_MPEG: &str = "audio/mpeg";
pub const MIME_WAV: &str = "audio/wav";

/// Map a declared audio format to the MIME type used for playback.
/// Only `mp3` gets its own type; everything else plays as WAV.
pub fn format_to_mime(format: Option<&str>) -> &'static str {
    match format.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
        Some("mp3") => MIME_MPEG,
        _ => MIME_WAV,
    }
}

/// Build a playable `data:` URI from a base64 payload
pub fn data_uri(mime_type: &str, base64_audio: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_audio)
}

/// A decoded `data:<mime>;base64,<payload>` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAudio {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataUriError {
    #[error("not a base64 data URI")]
    Malformed,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub fn decode_data_uri(uri: &str) -> Result<DecodedAudio, DataUriError> {
    let rest = uri.strip_prefix("data:").ok_or(DataUriError::Malformed)?;
    let (mime_type, payload) = rest.split_once(";base64,").ok_or(DataUriError::Malformed)?;
    let bytes = STANDARD.decode(payload)?;

    Ok(DecodedAudio {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// File extension for an audio MIME type
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        MIME_MPEG => "mp3",
        "audio/mp4" => "m4a",
        "audio/ogg" => "ogg",
        "audio/flac" => "flac",
        "audio/pcm" => "pcm",
        _ => "wav",
    }
}

/// Guess the MIME type of an enrollment sample from its extension.
/// Unknown extensions fall back to `audio/mpeg`, matching the backend.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("wav") => MIME_WAV,
        Some("m4a") | Some("mp4") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        _ => MIME_MPEG,
    }
}
