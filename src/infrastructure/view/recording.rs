use super::{StatusTone, StudioView};
use crate::domain::scope::{Action, Player, Scope};
use parking_lot::Mutex;
use std::collections::HashMap;

/// One call made against a [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Status {
        scope: Scope,
        message: String,
        tone: StatusTone,
    },
    Progress {
        scope: Scope,
        percent: u8,
    },
    ActionEnabled {
        action: Action,
        enabled: bool,
    },
    VoiceName {
        scope: Scope,
        voice: String,
    },
    AudioSource {
        player: Player,
        source: Option<String>,
    },
}

/// Headless view that keeps every update in memory.
///
/// Used when the studio is embedded without a renderer, and by tests to
/// observe exactly what the flows showed.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    disabled: Mutex<HashMap<Action, bool>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    pub fn progress_values(&self, scope: Scope) -> Vec<u8> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Progress { scope: s, percent } if *s == scope => Some(*percent),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self, scope: Scope) -> Option<(String, StatusTone)> {
        self.events.lock().iter().rev().find_map(|event| match event {
            ViewEvent::Status {
                scope: s,
                message,
                tone,
            } if *s == scope => Some((message.clone(), *tone)),
            _ => None,
        })
    }

    pub fn voice_name(&self, scope: Scope) -> Option<String> {
        self.events.lock().iter().rev().find_map(|event| match event {
            ViewEvent::VoiceName { scope: s, voice } if *s == scope => Some(voice.clone()),
            _ => None,
        })
    }

    /// Current source of a player; `None` if never set or cleared
    pub fn audio_source(&self, player: Player) -> Option<String> {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                ViewEvent::AudioSource { player: p, source } if *p == player => Some(source.clone()),
                _ => None,
            })
            .flatten()
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        !self.disabled.lock().get(&action).copied().unwrap_or(false)
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().push(event);
    }
}

impl StudioView for RecordingView {
    fn set_status(&self, scope: Scope, message: &str, tone: StatusTone) {
        self.push(ViewEvent::Status {
            scope,
            message: message.to_string(),
            tone,
        });
    }

    fn set_progress(&self, scope: Scope, percent: u8) {
        self.push(ViewEvent::Progress { scope, percent });
    }

    fn set_action_enabled(&self, action: Action, enabled: bool) {
        self.disabled.lock().insert(action, !enabled);
        self.push(ViewEvent::ActionEnabled { action, enabled });
    }

    fn set_voice_name(&self, scope: Scope, voice: &str) {
        self.push(ViewEvent::VoiceName {
            scope,
            voice: voice.to_string(),
        });
    }

    fn set_audio_source(&self, player: Player, source: Option<&str>) {
        self.push(ViewEvent::AudioSource {
            player,
            source: source.map(str::to_string),
        });
    }
}
