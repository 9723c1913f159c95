use crate::domain::voice::{
    DesignForm, DEFAULT_DESIGN_MODEL, DEFAULT_ENROLL_MODEL, DEFAULT_LANGUAGE,
    DEFAULT_RESPONSE_FORMAT, DEFAULT_SAMPLE_RATE,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "voice-studio")]
#[command(about = "Design, clone and speak with voices on a voice studio backend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a voice from a text description
    Design(DesignArgs),
    /// Clone a voice from an audio sample
    Enroll(EnrollArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DesignArgs {
    /// Description of the voice to create
    pub voice_prompt: String,

    /// Text spoken in the preview clip
    pub preview_text: String,

    /// Preferred voice name
    #[arg(long = "name")]
    pub preferred_name: Option<String>,

    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    #[arg(long = "model", default_value = DEFAULT_DESIGN_MODEL)]
    pub target_model: String,

    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Format of the preview clip (wav, mp3, ...)
    #[arg(long = "format", default_value = DEFAULT_RESPONSE_FORMAT)]
    pub response_format: String,

    /// Synthesize TEXT with the new voice
    #[arg(long, value_name = "TEXT")]
    pub speak: Option<String>,
}

impl DesignArgs {
    pub fn form(&self) -> DesignForm {
        DesignForm {
            voice_prompt: self.voice_prompt.clone(),
            preview_text: self.preview_text.clone(),
            preferred_name: self.preferred_name.clone().unwrap_or_default(),
            language: self.language.clone(),
            target_model: self.target_model.clone(),
            sample_rate: self.sample_rate,
            response_format: self.response_format.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EnrollArgs {
    /// Audio sample of the voice to clone
    pub audio_path: PathBuf,

    /// Preferred voice name
    #[arg(long = "name")]
    pub preferred_name: Option<String>,

    /// MIME type of the sample; guessed from the extension when absent
    #[arg(long = "mime", value_name = "TYPE")]
    pub audio_mime_type: Option<String>,

    #[arg(long = "model", default_value = DEFAULT_ENROLL_MODEL)]
    pub target_model: String,

    /// Synthesize TEXT with the new voice
    #[arg(long, value_name = "TEXT")]
    pub speak: Option<String>,
}
