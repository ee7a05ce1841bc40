//! Baubles hanging on the surface of the tree

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::animation::{Easing, Stagger};
use crate::error::Result;
use super::layout::{random_angle, random_in_sphere, random_rotation, TreeShape};
use super::pose::{DualPose, Entity, Pose};
use super::set::EntitySet;

const ORNAMENT_SPREAD: f32 = 0.5;
/// Ornaments sit slightly proud of the foliage
const SURFACE_OFFSET: f32 = 1.05;
/// Ornaments scatter wider than the foliage cloud
const SCATTER_SCALE: f32 = 1.3;

/// Ornament system: tumbling scatter → hung on the cone, bottom row first
pub struct OrnamentSystem {
    set: EntitySet,
}

impl OrnamentSystem {
    pub fn new(count: usize, shape: &TreeShape, seed: u64) -> Result<Self> {
        // Decorrelate from foliage generated with the same seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x6f72_6e61_6d65_6e74);
        let mut entities = Vec::with_capacity(count);

        for _ in 0..count {
            let y = shape.height * rng.gen_range(0.08..0.9);
            let formed = Pose::at(shape.ring_point(y, random_angle(&mut rng), SURFACE_OFFSET))?;
            let chaos = Pose::new(
                random_in_sphere(&mut rng, shape.center(), shape.scatter_radius * SCATTER_SCALE),
                random_rotation(&mut rng),
            )?;

            let order = if shape.height > 0.0 { y / shape.height } else { 0.0 };
            entities.push(Entity::new(
                DualPose::new(chaos, formed),
                Stagger::new(ORNAMENT_SPREAD, order),
            ));
        }

        log::debug!("generated {} ornaments", entities.len());

        Ok(Self {
            set: EntitySet::new(entities, Easing::EaseInOut),
        })
    }

    pub fn set(&self) -> &EntitySet {
        &self.set
    }

    pub fn count(&self) -> usize {
        self.set.len()
    }

    pub fn get_pose_data(&self, progress: f32) -> Vec<f32> {
        self.set.get_pose_data(progress)
    }
}
