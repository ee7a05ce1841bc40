//! Easing functions shaping linear progress into perceived motion

use serde::{Deserialize, Serialize};

/// Easing function types
///
/// Every curve maps `0.0` to exactly `0.0` and `1.0` to exactly `1.0`, so a
/// pose blended with an eased value lands on its endpoints without drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Slow start, accelerate
    EaseIn,
    /// Fast start, decelerate
    EaseOut,
    /// Quadratic ease-in-out
    EaseInOut,
    /// Cubic Hermite `3t² - 2t³`
    #[default]
    SmoothStep,
    /// Quintic `6t⁵ - 15t⁴ + 10t³`, zero first and second derivative at the ends
    SmootherStep,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    // NaN fails both comparisons and falls through to the clamp below,
    // which would keep it NaN; pin it to the start instead.
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        Easing::SmootherStep => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
    }
}
