use voice_studio_client::domain::scope::{Action, Scope};
use voice_studio_client::infrastructure::view::{RecordingView, StatusTone};

pub fn assert_status(view: &RecordingView, scope: Scope, message: &str, tone: StatusTone) {
    assert_eq!(
        view.last_status(scope),
        Some((message.to_string(), tone)),
        "Unexpected {} status",
        scope
    );
}

pub fn assert_completed(view: &RecordingView, scope: Scope) {
    assert_eq!(
        view.progress_values(scope).last(),
        Some(&100),
        "Progress of {} did not reach 100",
        scope
    );
    let (_, tone) = view.last_status(scope).expect("Missing status");
    assert_eq!(tone, StatusTone::Success);
}

/// Ticking stays at or below 92 and never goes backwards before the final value
pub fn assert_progress_shape(view: &RecordingView, scope: Scope) {
    let values = view.progress_values(scope);
    assert_eq!(values.first(), Some(&0), "Progress must start at 0");

    let ticking = &values[..values.len().saturating_sub(1)];
    assert!(
        ticking.iter().all(|v| *v <= 92),
        "Progress exceeded 92 while ticking: {:?}",
        values
    );
    assert!(
        ticking.windows(2).all(|w| w[0] <= w[1]),
        "Progress went backwards: {:?}",
        values
    );
}

pub fn assert_all_enabled(view: &RecordingView) {
    for action in [
        Action::DesignCreate,
        Action::DesignSynthesize,
        Action::EnrollCreate,
        Action::EnrollSynthesize,
    ] {
        assert!(view.is_enabled(action), "{} left disabled", action);
    }
}
