use super::{
    load_speech, run_flow, voice_label, ActionControl, FlowContext, FlowLabels, FlowOutcome,
};
use crate::domain::scope::{Action, Player, Scope};
use crate::domain::voice::{
    data_uri, format_to_mime, DesignForm, DesignVoiceRequest, DesignVoiceResponse, ScopeSession,
    SynthesisForm, TtsRequest, TtsResponse, SYNTHESIS_FORMAT,
};
use crate::error::{FlowError, FlowResult};
use std::sync::Arc;

/// Voice design scope: create a voice from a description, then speak with it
pub struct DesignController {
    ctx: Arc<FlowContext>,
    session: ScopeSession,
    create_control: ActionControl,
    synthesize_control: ActionControl,
}

impl DesignController {
    pub fn new(ctx: Arc<FlowContext>) -> Self {
        let session = ScopeSession::new(Scope::Design, ctx.view.clone());
        Self::with_session(ctx, session)
    }

    pub fn with_session(ctx: Arc<FlowContext>, session: ScopeSession) -> Self {
        Self {
            ctx,
            session,
            create_control: ActionControl::new(Action::DesignCreate),
            synthesize_control: ActionControl::new(Action::DesignSynthesize),
        }
    }

    pub fn session(&self) -> &ScopeSession {
        &self.session
    }

    /// POST /api/design-voice and keep the returned voice for this scope
    pub async fn create_voice(&self, form: DesignForm) -> FlowResult<FlowOutcome> {
        let ctx = self.ctx.as_ref();
        let labels = FlowLabels {
            running: ctx.messages.design_creating,
            done: ctx.messages.design_created,
        };

        let request = async move {
            let request = DesignVoiceRequest {
                api_key: ctx.api_key.clone(),
                voice_prompt: form.voice_prompt,
                preview_text: form.preview_text,
                preferred_name: form.preferred_name,
                language: form.language,
                target_model: form.target_model,
                sample_rate: form.sample_rate,
                response_format: form.response_format,
            };
            ctx.api.design_voice(&request).await.map_err(FlowError::from)
        };

        let apply = |response: DesignVoiceResponse| {
            self.session.set_voice_handle(response.voice.clone());
            ctx.view.set_voice_name(Scope::Design, voice_label(&response.voice));

            if let Some(audio) = response.preview_audio_base64.filter(|a| !a.is_empty()) {
                let mime_type = format_to_mime(response.preview_audio_format.as_deref());
                ctx.view
                    .set_audio_source(Player::DesignPreview, Some(&data_uri(mime_type, &audio)));
            }
        };

        run_flow(
            ctx,
            &self.session,
            &self.create_control,
            labels,
            request,
            apply,
        )
        .await
    }

    /// POST /api/tts with the voice most recently designed in this scope
    pub async fn synthesize(&self, form: SynthesisForm) -> FlowResult<FlowOutcome> {
        let ctx = self.ctx.as_ref();
        let session = &self.session;
        let labels = FlowLabels {
            running: ctx.messages.synthesizing,
            done: ctx.messages.synthesized,
        };

        let request = async move {
            let request = TtsRequest {
                api_key: ctx.api_key.clone(),
                voice: session.voice_handle(),
                text: form.text,
                model: form.model,
                sample_rate: form.sample_rate,
                format: SYNTHESIS_FORMAT.to_string(),
            };
            ctx.api.synthesize(&request).await.map_err(FlowError::from)
        };

        let apply = |response: TtsResponse| {
            load_speech(ctx.view.as_ref(), Player::DesignSpeech, &response);
        };

        run_flow(
            ctx,
            session,
            &self.synthesize_control,
            labels,
            request,
            apply,
        )
        .await
    }
}
