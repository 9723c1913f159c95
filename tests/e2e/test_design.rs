use crate::e2e::helpers;

use axum::http::StatusCode;
use helpers::assertions::{assert_all_enabled, assert_completed, assert_progress_shape, assert_status};
use helpers::fixtures::{design_form, design_speech};
use helpers::mock_backend::{Endpoint, Reply};
use helpers::{TestContext, TEST_API_KEY};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use voice_studio_client::controllers::FlowOutcome;
use voice_studio_client::domain::scope::{Player, Scope};
use voice_studio_client::domain::shared::{Locale, Messages};
use voice_studio_client::infrastructure::view::StatusTone;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_design_a_voice_and_show_the_preview(ctx: &mut TestContext) {
    let mut form = design_form("warm female storyteller");
    form.response_format = "mp3".to_string();

    let outcome = ctx.studio.design.create_voice(form).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Applied);
    assert_eq!(ctx.studio.design.session().voice_handle(), "vd-narrator-1");
    assert_eq!(ctx.view.voice_name(Scope::Design).as_deref(), Some("vd-narrator-1"));
    assert_eq!(
        ctx.view.audio_source(Player::DesignPreview).as_deref(),
        Some("data:audio/mpeg;base64,UklGRg==")
    );
    assert_status(&ctx.view, Scope::Design, "Voice generated.", StatusTone::Success);
    assert_completed(&ctx.view, Scope::Design);
    assert_progress_shape(&ctx.view, Scope::Design);
    assert_all_enabled(&ctx.view);

    let sent = ctx.backend.design_requests.lock()[0].clone();
    assert_eq!(
        sent,
        json!({
            "api_key": TEST_API_KEY,
            "voice_prompt": "warm female storyteller",
            "preview_text": "The quick brown fox jumps over the lazy dog.",
            "preferred_name": "narrator",
            "language": "zh",
            "target_model": "qwen3-tts-vd-realtime-2025-12-16",
            "sample_rate": 24000,
            "response_format": "mp3",
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_treat_non_mp3_previews_as_wav(ctx: &mut TestContext) {
    ctx.studio
        .design
        .create_voice(design_form("deep voice"))
        .await
        .unwrap();

    assert_eq!(
        ctx.view.audio_source(Player::DesignPreview).as_deref(),
        Some("data:audio/wav;base64,UklGRg==")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_with_the_designed_voice(ctx: &mut TestContext) {
    ctx.studio
        .design
        .create_voice(design_form("calm narrator"))
        .await
        .unwrap();
    ctx.view.clear();

    let outcome = ctx
        .studio
        .design
        .synthesize(design_speech("Good evening"))
        .await
        .unwrap();

    assert_eq!(outcome, FlowOutcome::Applied);
    assert_eq!(
        ctx.view.audio_source(Player::DesignSpeech).as_deref(),
        Some("data:audio/wav;base64,AAA=")
    );
    assert_status(&ctx.view, Scope::Design, "Synthesis complete.", StatusTone::Success);
    assert_completed(&ctx.view, Scope::Design);

    let sent = ctx.backend.tts_requests.lock()[0].clone();
    assert_eq!(sent["voice"], "vd-narrator-1");
    assert_eq!(sent["text"], "Good evening");
    assert_eq!(sent["format"], "wav");
    assert_eq!(sent["sample_rate"], 24000);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_the_server_error_verbatim(ctx: &mut TestContext) {
    ctx.backend.respond_with(
        Endpoint::Design,
        Reply::Json(StatusCode::BAD_REQUEST, json!({ "error": "invalid prompt" })),
    );

    let err = ctx
        .studio
        .design
        .create_voice(design_form("???"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "invalid prompt");
    assert_status(&ctx.view, Scope::Design, "invalid prompt", StatusTone::Error);
    assert!(!ctx.view.progress_values(Scope::Design).contains(&100));
    assert_eq!(ctx.view.voice_name(Scope::Design), None);
    assert_eq!(ctx.studio.design.session().voice_handle(), "");
    assert_all_enabled(&ctx.view);
}

#[tokio::test]
async fn it_should_use_localized_fallback_message() {
    let ctx = TestContext::with_messages(Messages::for_locale(Locale::Zh)).await;
    ctx.backend.respond_with(
        Endpoint::Tts,
        Reply::Json(StatusCode::INTERNAL_SERVER_ERROR, json!({})),
    );

    let result = ctx.studio.design.synthesize(design_speech("你好")).await;

    assert!(result.is_err());
    assert_status(&ctx.view, Scope::Design, "请求失败", StatusTone::Error);
    assert_eq!(ctx.view.audio_source(Player::DesignSpeech), None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_backend_validation_errors_through(ctx: &mut TestContext) {
    // No voice designed yet: the handle is sent empty and the backend rejects it
    let err = ctx
        .studio
        .design
        .synthesize(design_speech("Hello"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "voice is required");
    assert_eq!(ctx.backend.hits(Endpoint::Tts), 1);
    assert_eq!(ctx.backend.tts_requests.lock()[0]["voice"], "");
    assert_status(&ctx.view, Scope::Design, "voice is required", StatusTone::Error);
}
