use crate::animation::Easing;
use super::pose::{Entity, Pose, POSE_STRIDE};

/// Entities of one visual class sharing an easing curve
#[derive(Debug, Clone)]
pub struct EntitySet {
    entities: Vec<Entity>,
    easing: Easing,
}

impl EntitySet {
    pub fn new(entities: Vec<Entity>, easing: Easing) -> Self {
        Self { entities, easing }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn pose_at(&self, index: usize, progress: f32) -> Option<Pose> {
        self.entities
            .get(index)
            .map(|e| e.pose_at(progress, self.easing))
    }

    /// Append every entity's pose for `progress` to `out`
    /// Format: position(3) + rotation(3) per entity
    pub fn write_pose_data(&self, progress: f32, out: &mut Vec<f32>) {
        out.reserve(self.entities.len() * POSE_STRIDE);
        for entity in &self.entities {
            entity.pose_at(progress, self.easing).write_to(out);
        }
    }

    pub fn get_pose_data(&self, progress: f32) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.entities.len() * POSE_STRIDE);
        self.write_pose_data(progress, &mut data);
        data
    }
}
