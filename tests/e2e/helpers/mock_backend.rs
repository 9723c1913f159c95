use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Canned reply that replaces an endpoint's normal behaviour
#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, String),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Text(status, body) => (status, body).into_response(),
        }
    }
}

/// Multipart fields received by the enrollment endpoint
#[derive(Debug, Clone, Default)]
pub struct EnrollUpload {
    pub fields: Vec<(String, String)>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub audio: Vec<u8>,
}

impl EnrollUpload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Design,
    Enroll,
    Tts,
}

/// Behaviour and call log of the mock studio backend
#[derive(Default)]
pub struct MockBackend {
    design_hits: AtomicUsize,
    enroll_hits: AtomicUsize,
    tts_hits: AtomicUsize,
    voices_created: AtomicUsize,
    overrides: Mutex<Vec<(Endpoint, Reply)>>,
    delays: Mutex<Vec<(Endpoint, Duration)>>,
    pub design_requests: Mutex<Vec<Value>>,
    pub tts_requests: Mutex<Vec<Value>>,
    pub enroll_requests: Mutex<Vec<EnrollUpload>>,
}

impl MockBackend {
    pub fn hits(&self, endpoint: Endpoint) -> usize {
        match endpoint {
            Endpoint::Design => self.design_hits.load(Ordering::SeqCst),
            Endpoint::Enroll => self.enroll_hits.load(Ordering::SeqCst),
            Endpoint::Tts => self.tts_hits.load(Ordering::SeqCst),
        }
    }

    /// Answer every call to `endpoint` with `reply`
    pub fn respond_with(&self, endpoint: Endpoint, reply: Reply) {
        let mut overrides = self.overrides.lock();
        overrides.retain(|(e, _)| *e != endpoint);
        overrides.push((endpoint, reply));
    }

    /// Hold every response of `endpoint` for `delay`
    pub fn delay(&self, endpoint: Endpoint, delay: Duration) {
        let mut delays = self.delays.lock();
        delays.retain(|(e, _)| *e != endpoint);
        delays.push((endpoint, delay));
    }

    fn override_for(&self, endpoint: Endpoint) -> Option<Reply> {
        self.overrides
            .lock()
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, reply)| reply.clone())
    }

    async fn wait(&self, endpoint: Endpoint) {
        let delay = self
            .delays
            .lock()
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, d)| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn next_voice(&self, prefix: &str, preferred_name: &str) -> String {
        let n = self.voices_created.fetch_add(1, Ordering::SeqCst) + 1;
        let name = if preferred_name.is_empty() {
            "voice"
        } else {
            preferred_name
        };
        format!("{}-{}-{}", prefix, name, n)
    }
}

pub fn router(backend: Arc<MockBackend>) -> Router {
    Router::new()
        .route("/api/design-voice", post(design_voice))
        .route("/api/enroll-voice", post(enroll_voice))
        .route("/api/tts", post(tts))
        .with_state(backend)
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn text_field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).unwrap_or_default().trim()
}

async fn design_voice(
    State(backend): State<Arc<MockBackend>>,
    Json(body): Json<Value>,
) -> Response {
    backend.design_hits.fetch_add(1, Ordering::SeqCst);
    backend.design_requests.lock().push(body.clone());
    backend.wait(Endpoint::Design).await;

    if let Some(reply) = backend.override_for(Endpoint::Design) {
        return reply.into_response();
    }
    if text_field(&body, "voice_prompt").is_empty() {
        return bad_request("voice_prompt is required");
    }
    if text_field(&body, "preview_text").is_empty() {
        return bad_request("preview_text is required");
    }

    let voice = backend.next_voice("vd", text_field(&body, "preferred_name"));
    Json(json!({
        "voice": voice,
        "preview_audio_base64": "UklGRg==",
        "preview_audio_format": text_field(&body, "response_format"),
    }))
    .into_response()
}

async fn enroll_voice(State(backend): State<Arc<MockBackend>>, mut multipart: Multipart) -> Response {
    backend.enroll_hits.fetch_add(1, Ordering::SeqCst);

    let mut upload = EnrollUpload::default();
    let mut has_audio = false;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "audio" {
            has_audio = true;
            upload.file_name = field.file_name().map(str::to_string);
            upload.content_type = field.content_type().map(str::to_string);
            upload.audio = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        } else {
            let value = field.text().await.unwrap_or_default();
            upload.fields.push((name, value));
        }
    }

    let preferred_name = upload.field("preferred_name").unwrap_or_default().to_string();
    backend.enroll_requests.lock().push(upload);
    backend.wait(Endpoint::Enroll).await;

    if let Some(reply) = backend.override_for(Endpoint::Enroll) {
        return reply.into_response();
    }
    if !has_audio {
        return bad_request("audio file is required");
    }

    let voice = backend.next_voice("vc", &preferred_name);
    Json(json!({ "voice": voice })).into_response()
}

async fn tts(State(backend): State<Arc<MockBackend>>, Json(body): Json<Value>) -> Response {
    backend.tts_hits.fetch_add(1, Ordering::SeqCst);
    backend.tts_requests.lock().push(body.clone());
    backend.wait(Endpoint::Tts).await;

    if let Some(reply) = backend.override_for(Endpoint::Tts) {
        return reply.into_response();
    }
    if text_field(&body, "voice").is_empty() {
        return bad_request("voice is required");
    }
    if text_field(&body, "text").is_empty() {
        return bad_request("text is required");
    }

    Json(json!({ "audio_base64": "AAA=", "mime_type": "audio/wav" })).into_response()
}
