//! Animation module for the chaos/formed transition
//!
//! A single controller advances one progress value per frame; entities shape
//! that value with an easing curve and a per-entity stagger.

mod easing;
mod stagger;
mod transition;

pub use easing::{Easing, ease};
pub use stagger::Stagger;
pub use transition::{
    TransitionController, TransitionState, DEFAULT_RATE, DEFAULT_SNAP_EPSILON,
};
