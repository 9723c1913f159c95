use super::curve::{display_percent, ProgressConfigError, ProgressCurve};
use crate::domain::scope::Scope;
use crate::infrastructure::view::{StatusTone, StudioView};
use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Period of the simulated progress tick
pub const TICK_PERIOD: Duration = Duration::from_millis(220);

/// The one live simulation of a scope
struct ActiveRun {
    generation: u64,
    value: f64,
    ticker: JoinHandle<()>,
}

struct Inner {
    scope: Scope,
    view: Arc<dyn StudioView>,
    curve: ProgressCurve,
    period: Duration,
    generations: AtomicU64,
    slot: Mutex<Option<ActiveRun>>,
}

impl Inner {
    /// Remove the active run if it still belongs to `generation`
    fn take_current(slot: &mut Option<ActiveRun>, generation: u64) -> Option<ActiveRun> {
        match slot {
            Some(run) if run.generation == generation => slot.take(),
            _ => None,
        }
    }
}

/// Client-side fake progress for one scope.
///
/// The server reports no progress, so while a request is outstanding the
/// simulator advances a bar with random, decelerating steps and holds it
/// below 100 until the caller settles the returned [`ProgressHandle`].
///
/// Every [`begin`](Self::begin) supersedes the previous simulation of the
/// scope: its timer is aborted and its handle becomes inert. All reads and
/// writes of the live run happen under one lock, so a superseded timer can
/// never write to the view after `begin` returns.
#[derive(Clone)]
pub struct ProgressSimulator {
    inner: Arc<Inner>,
}

impl ProgressSimulator {
    pub fn new(scope: Scope, view: Arc<dyn StudioView>) -> Self {
        Self::build(scope, view, ProgressCurve::default(), TICK_PERIOD)
    }

    /// Simulator with its own curve and tick period; the period must be non-zero
    pub fn with_curve(
        scope: Scope,
        view: Arc<dyn StudioView>,
        curve: ProgressCurve,
        period: Duration,
    ) -> Result<Self, ProgressConfigError> {
        if period.is_zero() {
            return Err(ProgressConfigError::ZeroPeriod);
        }
        Ok(Self::build(scope, view, curve, period))
    }

    fn build(
        scope: Scope,
        view: Arc<dyn StudioView>,
        curve: ProgressCurve,
        period: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                scope,
                view,
                curve,
                period,
                generations: AtomicU64::new(0),
                slot: Mutex::new(None),
            }),
        }
    }

    pub fn scope(&self) -> Scope {
        self.inner.scope
    }

    /// Start a fresh simulation at 0, stopping any previous one for this scope.
    ///
    /// Must be called from within a tokio runtime.
    pub fn begin(&self, label: &str) -> ProgressHandle {
        let inner = &self.inner;
        let mut slot = inner.slot.lock();

        if let Some(previous) = slot.take() {
            previous.ticker.abort();
            tracing::debug!(
                scope = %inner.scope,
                generation = previous.generation,
                value = previous.value,
                "Progress simulation superseded"
            );
        }

        let generation = inner.generations.fetch_add(1, Ordering::SeqCst) + 1;

        inner.view.set_progress(inner.scope, 0);
        inner.view.set_status(inner.scope, label, StatusTone::Info);

        let ticker = tokio::spawn(tick_loop(Arc::clone(inner), generation));
        *slot = Some(ActiveRun {
            generation,
            value: 0.0,
            ticker,
        });

        tracing::debug!(scope = %inner.scope, generation, label, "Progress simulation started");

        ProgressHandle {
            inner: Arc::clone(inner),
            generation,
            settled: false,
        }
    }

    /// Generation of the live simulation, if any
    pub fn current_generation(&self) -> Option<u64> {
        self.inner.slot.lock().as_ref().map(|run| run.generation)
    }

    /// Unfloored value of the live simulation, if any
    pub fn current_value(&self) -> Option<f64> {
        self.inner.slot.lock().as_ref().map(|run| run.value)
    }

    pub fn is_active(&self) -> bool {
        self.inner.slot.lock().is_some()
    }
}

async fn tick_loop(inner: Arc<Inner>, generation: u64) {
    let mut rng = StdRng::from_entropy();
    let mut ticks = interval_at(Instant::now() + inner.period, inner.period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;

        let mut slot = inner.slot.lock();
        let run = match slot.as_mut() {
            Some(run) if run.generation == generation => run,
            // Superseded or settled while we slept
            _ => break,
        };

        if let Some(next) = inner.curve.advance(run.value, &mut rng) {
            run.value = next;
            inner.view.set_progress(inner.scope, display_percent(next));
        }
    }
}

/// Terminal side of one simulation.
///
/// `complete` and `fail` consume the handle, so each simulation is settled
/// at most once. Both are no-ops once a newer `begin` has superseded it.
/// Dropping an unsettled handle stops its timer without touching the status.
pub struct ProgressHandle {
    inner: Arc<Inner>,
    generation: u64,
    settled: bool,
}

impl ProgressHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scope(&self) -> Scope {
        self.inner.scope
    }

    /// Whether this is still the scope's live simulation
    pub fn is_current(&self) -> bool {
        self.inner
            .slot
            .lock()
            .as_ref()
            .map_or(false, |run| run.generation == self.generation)
    }

    /// Stop ticking, force the bar to 100 and show `message`.
    /// Returns `false` if the simulation was superseded.
    pub fn complete(self, message: &str) -> bool {
        self.complete_with(message, || ())
    }

    /// Like [`complete`](Self::complete), but runs `apply` first, under the
    /// same currency check. A superseded flow never gets to apply its result.
    pub fn complete_with<F: FnOnce()>(mut self, message: &str, apply: F) -> bool {
        self.settled = true;
        let scope = self.inner.scope;
        let mut slot = self.inner.slot.lock();

        let Some(run) = Inner::take_current(&mut slot, self.generation) else {
            tracing::debug!(scope = %scope, generation = self.generation, "Discarding stale completion");
            return false;
        };
        run.ticker.abort();

        apply();
        self.inner.view.set_progress(scope, 100);
        self.inner.view.set_status(scope, message, StatusTone::Success);
        true
    }

    /// Stop ticking and show `message` as an error; the bar keeps its last value.
    /// Returns `false` if the simulation was superseded.
    pub fn fail(mut self, message: &str) -> bool {
        self.settled = true;
        let scope = self.inner.scope;
        let mut slot = self.inner.slot.lock();

        let Some(run) = Inner::take_current(&mut slot, self.generation) else {
            tracing::debug!(scope = %scope, generation = self.generation, "Discarding stale failure");
            return false;
        };
        run.ticker.abort();

        self.inner.view.set_status(scope, message, StatusTone::Error);
        true
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let mut slot = self.inner.slot.lock();
        if let Some(run) = Inner::take_current(&mut slot, self.generation) {
            run.ticker.abort();
            tracing::debug!(
                scope = %self.inner.scope,
                generation = self.generation,
                "Progress handle dropped without settling"
            );
        }
    }
}
