use crate::domain::progress::ProgressSimulator;
use crate::domain::scope::Scope;
use crate::infrastructure::view::StudioView;
use parking_lot::Mutex;
use std::sync::Arc;

/// State owned by one scope: its progress simulator and the voice handle
/// created most recently in that scope.
pub struct ScopeSession {
    scope: Scope,
    progress: ProgressSimulator,
    voice: Mutex<Option<String>>,
}

impl ScopeSession {
    pub fn new(scope: Scope, view: Arc<dyn StudioView>) -> Self {
        Self::with_progress(ProgressSimulator::new(scope, view))
    }

    pub fn with_progress(progress: ProgressSimulator) -> Self {
        Self {
            scope: progress.scope(),
            progress,
            voice: Mutex::new(None),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    /// Voice handle used by this scope's synthesis; empty until one is created
    pub fn voice_handle(&self) -> String {
        self.voice.lock().clone().unwrap_or_default()
    }

    pub fn set_voice_handle(&self, voice: impl Into<String>) {
        let voice = voice.into();
        tracing::debug!(scope = %self.scope, voice = %voice, "Voice handle updated");
        *self.voice.lock() = Some(voice);
    }
}
