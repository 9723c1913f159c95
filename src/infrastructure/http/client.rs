use super::error::ApiError;
use super::{DESIGN_VOICE_ENDPOINT, ENROLL_VOICE_ENDPOINT, TTS_ENDPOINT};
use crate::domain::voice::{
    DesignVoiceRequest, DesignVoiceResponse, EnrollVoiceRequest, EnrollVoiceResponse, TtsRequest,
    TtsResponse,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const DEFAULT_FALLBACK_MESSAGE: &str = "Request failed";

/// Operations offered by the studio backend.
/// Abstracts the transport so flows can run against any implementation.
#[async_trait]
pub trait VoiceStudioApi: Send + Sync {
    /// Create a voice from a text description; may return a preview clip
    async fn design_voice(
        &self,
        request: &DesignVoiceRequest,
    ) -> Result<DesignVoiceResponse, ApiError>;

    /// Create a voice from an uploaded audio sample
    async fn enroll_voice(
        &self,
        request: EnrollVoiceRequest,
    ) -> Result<EnrollVoiceResponse, ApiError>;

    /// Speak `text` with a previously created voice
    async fn synthesize(&self, request: &TtsRequest) -> Result<TtsResponse, ApiError>;
}

/// HTTP client for the studio backend.
///
/// One network call per request; no retries and no timeout beyond the
/// transport defaults.
pub struct VoiceStudioClient {
    base_url: String,
    fallback_message: String,
    http_client: reqwest::Client,
}

impl VoiceStudioClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Message reported when a failed response carries no `error` field
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `endpoint`
    pub async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!(endpoint, "Sending JSON request");

        let response = self
            .http_client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await?;

        self.read_response(endpoint, response).await
    }

    /// POST a multipart form to `endpoint`
    pub async fn post_form<R>(&self, endpoint: &str, form: Form) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(endpoint, "Sending multipart request");

        let response = self
            .http_client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await?;

        self.read_response(endpoint, response).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// The body is parsed as JSON whatever the status. Failed responses turn
    /// into [`ApiError::Server`] with the backend's `error` field.
    async fn read_response<R>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&bytes);

        if !status.is_success() {
            let message = body
                .ok()
                .and_then(|value| server_error_message(&value))
                .unwrap_or_else(|| self.fallback_message.clone());

            tracing::warn!(
                endpoint,
                status = status.as_u16(),
                error = %message,
                "Studio backend rejected request"
            );

            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = body.map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::debug!(endpoint, status = status.as_u16(), "Studio backend responded");

        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Non-empty `error` string of a failed response body
fn server_error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn enrollment_form(request: EnrollVoiceRequest) -> Result<Form, ApiError> {
    let EnrollVoiceRequest {
        api_key,
        audio,
        preferred_name,
        audio_mime_type,
        target_model,
    } = request;

    let mut part = Part::bytes(audio.bytes).file_name(audio.file_name);
    if !audio_mime_type.trim().is_empty() {
        part = part
            .mime_str(audio_mime_type.trim())
            .map_err(|e| ApiError::InvalidForm(e.to_string()))?;
    }

    Ok(Form::new()
        .text("api_key", api_key)
        .part("audio", part)
        .text("preferred_name", preferred_name)
        .text("audio_mime_type", audio_mime_type)
        .text("target_model", target_model))
}

#[async_trait]
impl VoiceStudioApi for VoiceStudioClient {
    async fn design_voice(
        &self,
        request: &DesignVoiceRequest,
    ) -> Result<DesignVoiceResponse, ApiError> {
        tracing::info!(
            target_model = %request.target_model,
            language = %request.language,
            prompt_length = request.voice_prompt.len(),
            "Voice design request"
        );
        self.post_json(DESIGN_VOICE_ENDPOINT, request).await
    }

    async fn enroll_voice(
        &self,
        request: EnrollVoiceRequest,
    ) -> Result<EnrollVoiceResponse, ApiError> {
        tracing::info!(
            target_model = %request.target_model,
            file_name = %request.audio.file_name,
            audio_size = request.audio.bytes.len(),
            audio_mime_type = %request.audio_mime_type,
            "Voice enrollment request"
        );
        let form = enrollment_form(request)?;
        self.post_form(ENROLL_VOICE_ENDPOINT, form).await
    }

    async fn synthesize(&self, request: &TtsRequest) -> Result<TtsResponse, ApiError> {
        tracing::info!(
            model = %request.model,
            voice = %request.voice,
            text_length = request.text.len(),
            "Speech synthesis request"
        );
        self.post_json(TTS_ENDPOINT, request).await
    }
}
