use rand::Rng;
use std::ops::Range;

/// Ticking never carries the value past this point; only completion reaches 100
pub const HOLD_AT: f64 = 92.0;

/// Below this value the curve takes the large steps
const FAST_PHASE_END: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressConfigError {
    #[error("step range {start}..{end} must be finite, non-negative and non-empty")]
    InvalidStep { start: f64, end: f64 },

    #[error("tick period must be greater than zero")]
    ZeroPeriod,
}

/// Randomized, decelerating step generator for the simulated progress bar
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressCurve {
    fast_step: Range<f64>,
    slow_step: Range<f64>,
}

impl Default for ProgressCurve {
    fn default() -> Self {
        Self {
            fast_step: 4.0..10.0,
            slow_step: 0.8..3.0,
        }
    }
}

fn validate_step(step: &Range<f64>) -> Result<(), ProgressConfigError> {
    let valid = step.start.is_finite()
        && step.end.is_finite()
        && step.start >= 0.0
        && step.start < step.end;

    if valid {
        Ok(())
    } else {
        Err(ProgressConfigError::InvalidStep {
            start: step.start,
            end: step.end,
        })
    }
}

impl ProgressCurve {
    /// Steps drawn from `fast_step` below 60 and from `slow_step` above
    pub fn new(fast_step: Range<f64>, slow_step: Range<f64>) -> Result<Self, ProgressConfigError> {
        validate_step(&fast_step)?;
        validate_step(&slow_step)?;

        Ok(Self {
            fast_step,
            slow_step,
        })
    }

    pub fn fast_step(&self) -> &Range<f64> {
        &self.fast_step
    }

    pub fn slow_step(&self) -> &Range<f64> {
        &self.slow_step
    }

    /// Next value after one tick, or `None` when the bar should hold
    pub fn advance<R: Rng>(&self, value: f64, rng: &mut R) -> Option<f64> {
        if value >= HOLD_AT {
            return None;
        }

        let step = if value < FAST_PHASE_END {
            rng.gen_range(self.fast_step.clone())
        } else {
            rng.gen_range(self.slow_step.clone())
        };

        Some((value + step).clamp(0.0, HOLD_AT))
    }
}

/// Integer percentage shown to the user
pub fn display_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).floor() as u8
}
