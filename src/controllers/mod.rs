pub mod design;
pub mod enroll;
pub mod studio;

pub use design::DesignController;
pub use enroll::EnrollController;
pub use studio::VoiceStudio;

use crate::domain::scope::{Action, Player};
use crate::domain::shared::Messages;
use crate::domain::voice::audio::MIME_WAV;
use crate::domain::voice::{data_uri, ScopeSession, TtsResponse};
use crate::error::{FlowError, FlowResult};
use crate::infrastructure::http::VoiceStudioApi;
use crate::infrastructure::view::StudioView;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Collaborators shared by every flow
pub struct FlowContext {
    pub api: Arc<dyn VoiceStudioApi>,
    pub view: Arc<dyn StudioView>,
    pub messages: Messages,
    pub api_key: String,
}

/// How a flow attempt that reached the backend ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The response was applied to the scope
    Applied,
    /// A newer flow took over the scope; the response was dropped
    Superseded,
}

/// Enable/disable state of one action
pub(crate) struct ActionControl {
    action: Action,
    busy: AtomicBool,
}

impl ActionControl {
    pub(crate) fn new(action: Action) -> Self {
        Self {
            action,
            busy: AtomicBool::new(false),
        }
    }

    /// Disable the action until the returned guard drops
    fn acquire<'a>(&'a self, view: &'a dyn StudioView) -> FlowResult<ControlGuard<'a>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!(action = %self.action, "Rejected submission while action is running");
            return Err(FlowError::ActionBusy(self.action));
        }

        view.set_action_enabled(self.action, false);
        Ok(ControlGuard {
            control: self,
            view,
        })
    }
}

/// Re-enables its action on every exit path
struct ControlGuard<'a> {
    control: &'a ActionControl,
    view: &'a dyn StudioView,
}

impl Drop for ControlGuard<'_> {
    fn drop(&mut self) {
        self.control.busy.store(false, Ordering::Release);
        self.view.set_action_enabled(self.control.action, true);
    }
}

/// Status lines of one flow
pub(crate) struct FlowLabels {
    pub running: &'static str,
    pub done: &'static str,
}

/// The template all four flows follow.
///
/// Disables the action, starts the scope's progress, awaits `request`
/// (payload assembly and any pre-flight checks live inside it), then either
/// applies the result and completes the progress or reports the failure.
/// `apply` only runs if no newer flow has started in the scope meanwhile.
pub(crate) async fn run_flow<T, Fut, A>(
    ctx: &FlowContext,
    session: &ScopeSession,
    control: &ActionControl,
    labels: FlowLabels,
    request: Fut,
    apply: A,
) -> FlowResult<FlowOutcome>
where
    Fut: Future<Output = FlowResult<T>>,
    A: FnOnce(T),
{
    debug_assert_eq!(control.action.scope(), session.scope());
    let _guard = control.acquire(ctx.view.as_ref())?;

    let span = tracing::info_span!(
        "flow",
        action = %control.action,
        scope = %control.action.scope(),
        request_id = %Uuid::new_v4(),
    );

    async move {
        let progress = session.progress().begin(labels.running);
        tracing::info!(generation = progress.generation(), "Flow started");

        match request.await {
            Ok(payload) => {
                if progress.complete_with(labels.done, move || apply(payload)) {
                    tracing::info!("Flow completed");
                    Ok(FlowOutcome::Applied)
                } else {
                    tracing::info!("Flow superseded, response discarded");
                    Ok(FlowOutcome::Superseded)
                }
            }
            Err(err) => {
                let message = err.user_message(&ctx.messages);
                tracing::warn!(error = %err, "Flow failed");
                progress.fail(&message);
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}

/// Voice label shown after a creation call
pub(crate) fn voice_label(voice: &str) -> &str {
    if voice.is_empty() {
        "-"
    } else {
        voice
    }
}

/// Load synthesized speech into `player`; an empty payload clears it
pub(crate) fn load_speech(view: &dyn StudioView, player: Player, response: &TtsResponse) {
    if response.audio_base64.is_empty() {
        view.set_audio_source(player, None);
        return;
    }

    let mime_type = response
        .mime_type
        .as_deref()
        .filter(|mime| !mime.is_empty())
        .unwrap_or(MIME_WAV);
    view.set_audio_source(player, Some(&data_uri(mime_type, &response.audio_base64)));
}
