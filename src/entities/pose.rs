use crate::animation::{ease, Easing, Stagger};
use crate::error::{Result, SceneError};
use crate::math::Vec3;

/// Floats written per entity into a pose buffer:
/// position(3) + rotation(3)
pub const POSE_STRIDE: usize = 6;

/// Position plus Euler rotation (radians, XYZ order)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    /// Build a pose, rejecting NaN and infinite components
    pub fn new(position: Vec3, rotation: Vec3) -> Result<Self> {
        if !position.is_finite() {
            return Err(SceneError::NonFinitePose { field: "position" });
        }
        if !rotation.is_finite() {
            return Err(SceneError::NonFinitePose { field: "rotation" });
        }
        Ok(Self { position, rotation })
    }

    pub fn at(position: Vec3) -> Result<Self> {
        Self::new(position, Vec3::ZERO)
    }

    /// Per-component blend; exact at `t == 0` and `t == 1`
    pub fn blend(&self, other: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.blend(&other.position, t),
            rotation: self.rotation.blend(&other.rotation, t),
        }
    }

    pub fn write_to(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position.to_array());
        out.extend_from_slice(&self.rotation.to_array());
    }
}

/// Fixed chaos/formed endpoints of one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPose {
    pub chaos: Pose,
    pub formed: Pose,
}

impl DualPose {
    pub fn new(chaos: Pose, formed: Pose) -> Self {
        Self { chaos, formed }
    }
}

/// One animated entity: its endpoints and its place in the assembly sequence.
///
/// The displayed pose is derived on demand from the shared progress value;
/// nothing about the in-between state is stored.
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    pub poses: DualPose,
    pub stagger: Stagger,
}

impl Entity {
    pub fn new(poses: DualPose, stagger: Stagger) -> Self {
        Self { poses, stagger }
    }

    /// Local (staggered, eased) progress of this entity
    pub fn local_progress(&self, progress: f32, easing: Easing) -> f32 {
        ease(self.stagger.apply(progress), easing)
    }

    pub fn pose_at(&self, progress: f32, easing: Easing) -> Pose {
        let t = self.local_progress(progress, easing);
        self.poses.chaos.blend(&self.poses.formed, t)
    }
}
