//! Per-entity progress offsets so assembly reads as a sequence

/// Sequential offset applied to the shared progress value.
///
/// Effective progress is `clamp(p * (1 + spread) - offset, 0, 1)` with
/// `offset` in `[0, spread]`, so every entity still sits exactly at its chaos
/// pose for `p == 0` and exactly at its formed pose for `p == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    spread: f32,
    offset: f32,
}

impl Stagger {
    /// No offset: the entity follows the shared progress directly
    pub const NONE: Stagger = Stagger { spread: 0.0, offset: 0.0 };

    /// `order` in `[0, 1]` places the entity within the sequence
    /// (0 moves first, 1 moves last).
    pub fn new(spread: f32, order: f32) -> Self {
        let spread = if spread.is_finite() { spread.max(0.0) } else { 0.0 };
        let order = if order.is_finite() { order.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            spread,
            offset: spread * order,
        }
    }

    /// Order of entity `index` out of `count`, spread evenly over `[0, 1]`
    pub fn by_index(spread: f32, index: usize, count: usize) -> Self {
        let order = if count > 1 {
            index as f32 / (count - 1) as f32
        } else {
            0.0
        };
        Self::new(spread, order)
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Map shared progress to this entity's local progress
    pub fn apply(&self, progress: f32) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        (progress * (1.0 + self.spread) - self.offset).clamp(0.0, 1.0)
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::NONE
    }
}
