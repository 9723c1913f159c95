use voice_studio_client::domain::voice::{
    AudioUpload, DesignForm, EnrollForm, SynthesisForm, DEFAULT_DESIGN_MODEL,
    DEFAULT_ENROLL_MODEL,
};

pub fn design_form(prompt: &str) -> DesignForm {
    DesignForm {
        voice_prompt: prompt.to_string(),
        preview_text: "The quick brown fox jumps over the lazy dog.".to_string(),
        preferred_name: "narrator".to_string(),
        ..DesignForm::default()
    }
}

pub fn enroll_form() -> EnrollForm {
    EnrollForm {
        audio: Some(AudioUpload::new("sample.wav", wav_bytes())),
        preferred_name: "clone".to_string(),
        audio_mime_type: "audio/wav".to_string(),
        ..EnrollForm::default()
    }
}

pub fn design_speech(text: &str) -> SynthesisForm {
    SynthesisForm::new(text, DEFAULT_DESIGN_MODEL)
}

pub fn enroll_speech(text: &str) -> SynthesisForm {
    SynthesisForm::new(text, DEFAULT_ENROLL_MODEL)
}

/// A tiny but well-formed RIFF header
pub fn wav_bytes() -> Vec<u8> {
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&36u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav
}
