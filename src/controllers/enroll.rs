use super::{
    load_speech, run_flow, voice_label, ActionControl, FlowContext, FlowLabels, FlowOutcome,
};
use crate::domain::scope::{Action, Player, Scope};
use crate::domain::voice::{
    EnrollForm, EnrollVoiceRequest, EnrollVoiceResponse, ScopeSession, SynthesisForm, TtsRequest,
    TtsResponse, SYNTHESIS_FORMAT,
};
use crate::error::{FlowError, FlowResult};
use std::sync::Arc;

/// Voice enrollment scope: clone a voice from an audio sample, then speak with it
pub struct EnrollController {
    ctx: Arc<FlowContext>,
    session: ScopeSession,
    create_control: ActionControl,
    synthesize_control: ActionControl,
}

impl EnrollController {
    pub fn new(ctx: Arc<FlowContext>) -> Self {
        let session = ScopeSession::new(Scope::Enroll, ctx.view.clone());
        Self::with_session(ctx, session)
    }

    pub fn with_session(ctx: Arc<FlowContext>, session: ScopeSession) -> Self {
        Self {
            ctx,
            session,
            create_control: ActionControl::new(Action::EnrollCreate),
            synthesize_control: ActionControl::new(Action::EnrollSynthesize),
        }
    }

    pub fn session(&self) -> &ScopeSession {
        &self.session
    }

    /// POST /api/enroll-voice with the selected sample.
    ///
    /// Fails with [`FlowError::MissingAudioFile`] before any network call when
    /// no file is selected.
    pub async fn create_voice(&self, form: EnrollForm) -> FlowResult<FlowOutcome> {
        let ctx = self.ctx.as_ref();
        let labels = FlowLabels {
            running: ctx.messages.enroll_creating,
            done: ctx.messages.enroll_created,
        };

        let request = async move {
            let Some(audio) = form.audio else {
                return Err(FlowError::MissingAudioFile);
            };

            let request = EnrollVoiceRequest {
                api_key: ctx.api_key.clone(),
                audio,
                preferred_name: form.preferred_name,
                audio_mime_type: form.audio_mime_type,
                target_model: form.target_model,
            };
            ctx.api.enroll_voice(request).await.map_err(FlowError::from)
        };

        let apply = |response: EnrollVoiceResponse| {
            self.session.set_voice_handle(response.voice.clone());
            ctx.view.set_voice_name(Scope::Enroll, voice_label(&response.voice));
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

    /// POST /api/tts with the voice most recently enrolled in this scope
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
            load_speech(ctx.view.as_ref(), Player::EnrollSpeech, &response);
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
