use super::{DesignController, EnrollController, FlowContext};
use crate::domain::shared::Messages;
use crate::infrastructure::http::VoiceStudioApi;
use crate::infrastructure::view::StudioView;
use std::sync::Arc;

/// One studio session: both scopes wired to the same backend and view.
///
/// Each session owns its own scope state, so several sessions can run side
/// by side without sharing voices or progress.
pub struct VoiceStudio {
    pub design: DesignController,
    pub enroll: EnrollController,
}

impl VoiceStudio {
    pub fn new(
        api: Arc<dyn VoiceStudioApi>,
        view: Arc<dyn StudioView>,
        messages: Messages,
        api_key: String,
    ) -> Self {
        let ctx = Arc::new(FlowContext {
            api,
            view,
            messages,
            api_key,
        });

        Self {
            design: DesignController::new(ctx.clone()),
            enroll: EnrollController::new(ctx),
        }
    }
}
