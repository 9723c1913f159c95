pub mod recording;
pub mod terminal;

pub use recording::{RecordingView, ViewEvent};
pub use terminal::TerminalView;

use crate::domain::scope::{Action, Player, Scope};

/// How a status line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

/// The UI surface the flows drive.
///
/// Implementations render synchronously and must not call back into the
/// progress simulator; progress updates are delivered while the scope's
/// progress slot is locked.
pub trait StudioView: Send + Sync {
    fn set_status(&self, scope: Scope, message: &str, tone: StatusTone);

    /// Floored percentage in `0..=100`
    fn set_progress(&self, scope: Scope, percent: u8);

    fn set_action_enabled(&self, action: Action, enabled: bool);

    fn set_voice_name(&self, scope: Scope, voice: &str);

    /// Load a `data:` URI into a player, or clear it with `None`
    fn set_audio_source(&self, player: Player, source: Option<&str>);
}
