//! Needle particles filling the tree silhouette

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::animation::{Easing, Stagger};
use crate::error::Result;
use super::layout::{random_angle, random_in_sphere, TreeShape};
use super::pose::{DualPose, Entity, Pose};
use super::set::EntitySet;

/// Bottom-to-top sweep width of the foliage assembly
const FOLIAGE_SPREAD: f32 = 0.3;

/// Foliage particles: scattered cloud → filled cone
pub struct FoliageSystem {
    set: EntitySet,
}

impl FoliageSystem {
    pub fn new(count: usize, shape: &TreeShape, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut entities = Vec::with_capacity(count);

        for _ in 0..count {
            // sqrt biases samples toward the wide base, roughly even per area
            let y = shape.height * (1.0 - rng.gen::<f32>().sqrt());
            let depth = 0.55 + 0.45 * rng.gen::<f32>();
            let formed = Pose::at(shape.ring_point(y, random_angle(&mut rng), depth))?;
            let chaos = Pose::at(random_in_sphere(&mut rng, shape.center(), shape.scatter_radius))?;

            let order = if shape.height > 0.0 { y / shape.height } else { 0.0 };
            entities.push(Entity::new(
                DualPose::new(chaos, formed),
                Stagger::new(FOLIAGE_SPREAD, order),
            ));
        }

        log::debug!("generated {} foliage particles", entities.len());

        Ok(Self {
            set: EntitySet::new(entities, Easing::SmoothStep),
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
