//! Chaos/formed transition controller
//!
//! Owns the single progress scalar every interpolator reads. Progress is only
//! ever driven toward 0.0 (chaos) or 1.0 (formed); there is no way to park it
//! at an arbitrary value from outside.

use serde::{Deserialize, Serialize};

use crate::error::{positive, unit_fraction, Result};

/// Approach rate per second of the original scene
pub const DEFAULT_RATE: f32 = 0.8;
/// Remaining distance below which progress snaps onto its target
pub const DEFAULT_SNAP_EPSILON: f32 = 1e-3;

/// Discrete scene state chosen by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// Scattered, pre-assembly layout
    #[default]
    Chaos,
    /// Assembled tree layout
    Formed,
}

impl TransitionState {
    /// Progress value this state pulls toward
    pub fn target(self) -> f32 {
        match self {
            TransitionState::Chaos => 0.0,
            TransitionState::Formed => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TransitionState::Chaos => TransitionState::Formed,
            TransitionState::Formed => TransitionState::Chaos,
        }
    }
}

/// First-order approach of `progress` toward the current target
#[derive(Debug, Clone)]
pub struct TransitionController {
    progress: f32,
    rate: f32,
    snap_epsilon: f32,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self {
            progress: 0.0,
            rate: DEFAULT_RATE,
            snap_epsilon: DEFAULT_SNAP_EPSILON,
        }
    }
}

impl TransitionController {
    /// Starts at chaos (progress 0).
    ///
    /// `rate` must be finite and above zero, `snap_epsilon` strictly
    /// between zero and one; anything else could stall or poison progress.
    pub fn new(rate: f32, snap_epsilon: f32) -> Result<Self> {
        positive("transition.rate", rate)?;
        unit_fraction("transition.snap_epsilon", snap_epsilon)?;
        Ok(Self {
            progress: 0.0,
            rate,
            snap_epsilon,
        })
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether progress sits exactly on the target of `state`
    pub fn is_settled(&self, state: TransitionState) -> bool {
        self.progress == state.target()
    }

    /// Advance one frame toward `target_state` and return the new progress.
    ///
    /// The step is the exact solution of `dp/dt = rate * (target - p)` over
    /// `delta_time`, i.e. `(target - p) * (1 - e^(-rate * dt))`. For small
    /// frames this matches `(target - p) * dt * rate`; for long frames it
    /// never overshoots. Negative or non-finite deltas move nothing.
    ///
    /// `exp_m1` keeps the step non-zero for tiny `dt`, where `1 - exp(x)`
    /// would round to exactly zero in f32.
    pub fn advance(&mut self, delta_time: f32, target_state: TransitionState) -> f32 {
        let target = target_state.target();
        if self.progress == target {
            return self.progress;
        }

        if (target - self.progress).abs() < self.snap_epsilon {
            self.progress = target;
            return self.progress;
        }

        let dt = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };
        let blend = -(-self.rate * dt).exp_m1();
        let mut next = self.progress + (target - self.progress) * blend;

        if (target - next).abs() < self.snap_epsilon {
            next = target;
        }

        self.progress = next.clamp(0.0, 1.0);
        self.progress
    }
}
