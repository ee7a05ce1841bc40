//! Photo panels spiralling around the tree
//!
//! Unlike foliage and ornaments, panel endpoints are laid out from the panel
//! index alone, so a photo keeps its place when its image changes.

use std::f32::consts::{PI, TAU};

use crate::animation::{Easing, Stagger};
use crate::error::Result;
use crate::math::Vec3;
use super::layout::TreeShape;
use super::pose::{DualPose, Entity, Pose};
use super::set::EntitySet;

const POLAROID_SPREAD: f32 = 0.2;
/// Golden angle, spreads consecutive panels evenly around the trunk
const GOLDEN_ANGLE: f32 = 2.399_963;
/// Clearance between the cone surface and a formed panel
const SURFACE_CLEARANCE: f32 = 1.2;
/// Radius of the sphere used for ray picking a panel
pub const PANEL_PICK_RADIUS: f32 = 0.9;

/// A panel bound to the photo it displays
#[derive(Debug, Clone, Copy)]
pub struct Polaroid {
    pub photo_id: u32,
    pub entity: Entity,
}

pub struct PolaroidSystem {
    photo_ids: Vec<u32>,
    set: EntitySet,
}

impl PolaroidSystem {
    pub fn new(photo_ids: &[u32], shape: &TreeShape) -> Result<Self> {
        let count = photo_ids.len();
        let mut entities = Vec::with_capacity(count);

        for index in 0..count {
            entities.push(Entity::new(
                layout_panel(index, count, shape)?,
                Stagger::by_index(POLAROID_SPREAD, index, count),
            ));
        }

        Ok(Self {
            photo_ids: photo_ids.to_vec(),
            set: EntitySet::new(entities, Easing::SmootherStep),
        })
    }

    pub fn set(&self) -> &EntitySet {
        &self.set
    }

    pub fn count(&self) -> usize {
        self.set.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Polaroid> + '_ {
        self.photo_ids
            .iter()
            .zip(self.set.entities())
            .map(|(&photo_id, &entity)| Polaroid { photo_id, entity })
    }

    /// Current position of the panel showing `photo_id`
    pub fn position_of(&self, photo_id: u32, progress: f32) -> Option<Vec3> {
        let index = self.photo_ids.iter().position(|&id| id == photo_id)?;
        self.set.pose_at(index, progress).map(|p| p.position)
    }

    /// `(photo_id, current center)` of every panel, for picking
    pub fn pick_targets(&self, progress: f32) -> Vec<(u32, Vec3)> {
        self.iter()
            .map(|p| (p.photo_id, p.entity.pose_at(progress, self.set.easing()).position))
            .collect()
    }

    pub fn get_pose_data(&self, progress: f32) -> Vec<f32> {
        self.set.get_pose_data(progress)
    }
}

/// Formed: golden-angle spiral climbing the cone, each panel facing out.
/// Chaos: a loose tilted ring around the scene.
fn layout_panel(index: usize, count: usize, shape: &TreeShape) -> Result<DualPose> {
    let t = (index as f32 + 0.5) / count.max(1) as f32;
    let i = index as f32;

    let y = shape.height * (0.15 + 0.7 * t);
    let angle = i * GOLDEN_ANGLE;
    let r = shape.radius_at(y) + SURFACE_CLEARANCE;
    let formed = Pose::new(
        Vec3::new(r * angle.sin(), y, r * angle.cos()),
        Vec3::new(0.0, angle, 0.0),
    )?;

    let ring_angle = i * TAU / count.max(1) as f32 + 0.5;
    let ring_radius = shape.scatter_radius * 0.9;
    let chaos = Pose::new(
        Vec3::new(
            ring_radius * ring_angle.sin(),
            shape.height * 0.5 + (i * 1.7).sin() * shape.height * 0.25,
            ring_radius * ring_angle.cos(),
        ),
        Vec3::new((i * 0.9).sin() * 0.4, ring_angle + PI, (i * 1.3).cos() * 0.3),
    )?;

    Ok(DualPose::new(chaos, formed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<u32> {
        (0..6).collect()
    }

    #[test]
    fn test_one_panel_per_photo() {
        let system = PolaroidSystem::new(&ids(), &TreeShape::default()).unwrap();
        assert_eq!(system.count(), 6);
        let photo_ids: Vec<u32> = system.iter().map(|p| p.photo_id).collect();
        assert_eq!(photo_ids, ids());
    }

    #[test]
    fn test_layout_is_deterministic() {
        let shape = TreeShape::default();
        let a = PolaroidSystem::new(&ids(), &shape).unwrap();
        let b = PolaroidSystem::new(&ids(), &shape).unwrap();
        assert_eq!(a.get_pose_data(0.42), b.get_pose_data(0.42));
    }

    #[test]
    fn test_formed_panels_face_outward_outside_cone() {
        let shape = TreeShape::default();
        let system = PolaroidSystem::new(&ids(), &shape).unwrap();
        for p in system.iter() {
            let formed = p.entity.poses.formed;
            let pos = formed.position;
            let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!(r > shape.radius_at(pos.y));

            let facing = Vec3::new(formed.rotation.y.sin(), 0.0, formed.rotation.y.cos());
            let outward = Vec3::new(pos.x, 0.0, pos.z).normalize();
            assert!(facing.dot(&outward) > 0.99);
        }
    }

    #[test]
    fn test_panels_climb_in_index_order() {
        let system = PolaroidSystem::new(&ids(), &TreeShape::default()).unwrap();
        let heights: Vec<f32> = system.iter().map(|p| p.entity.poses.formed.position.y).collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_position_of() {
        let system = PolaroidSystem::new(&[7, 3], &TreeShape::default()).unwrap();
        let formed = system.position_of(3, 1.0).unwrap();
        assert_eq!(formed, system.iter().nth(1).unwrap().entity.poses.formed.position);
        assert!(system.position_of(99, 1.0).is_none());
    }

    #[test]
    fn test_pick_targets_follow_progress() {
        let system = PolaroidSystem::new(&ids(), &TreeShape::default()).unwrap();
        let chaos = system.pick_targets(0.0);
        let formed = system.pick_targets(1.0);
        assert_eq!(chaos.len(), 6);
        assert_ne!(chaos[0].1, formed[0].1);
        assert_eq!(formed[2].0, 2);
    }
}
