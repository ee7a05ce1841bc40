//! Shared geometry for generating chaos and formed endpoints

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::math::Vec3;

/// Cone silhouette the formed layout assembles into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeShape {
    /// Height of the cone tip above the base
    pub height: f32,
    /// Radius of the cone at its base
    pub base_radius: f32,
    /// Radius of the sphere the chaos layout scatters into
    pub scatter_radius: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            height: 12.0,
            base_radius: 5.0,
            scatter_radius: 15.0,
        }
    }
}

impl TreeShape {
    /// Cone radius at height `y` (0 at and above the tip)
    pub fn radius_at(&self, y: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        self.base_radius * (1.0 - (y / self.height).clamp(0.0, 1.0))
    }

    /// Center of the scatter sphere
    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, self.height * 0.5, 0.0)
    }

    /// Point on a horizontal circle of the cone at height `y`
    pub fn ring_point(&self, y: f32, angle: f32, radius_scale: f32) -> Vec3 {
        let r = self.radius_at(y) * radius_scale;
        Vec3::new(r * angle.sin(), y, r * angle.cos())
    }
}

/// Uniform random point inside a sphere
pub fn random_in_sphere<R: Rng>(rng: &mut R, center: Vec3, radius: f32) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if p.length_squared() <= 1.0 {
            return center + p.scale(radius);
        }
    }
}

/// Random Euler rotation with every axis in `[-PI, PI]`
pub fn random_rotation<R: Rng>(rng: &mut R) -> Vec3 {
    let half = TAU / 2.0;
    Vec3::new(
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
    )
}

/// Random angle around the trunk
pub fn random_angle<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_radius_tapers() {
        let shape = TreeShape::default();
        assert_eq!(shape.radius_at(0.0), 5.0);
        assert!((shape.radius_at(6.0) - 2.5).abs() < 0.0001);
        assert_eq!(shape.radius_at(12.0), 0.0);
        assert_eq!(shape.radius_at(20.0), 0.0);
    }

    #[test]
    fn test_ring_point_on_cone() {
        let shape = TreeShape::default();
        let p = shape.ring_point(3.0, 1.0, 1.0);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!((r - shape.radius_at(3.0)).abs() < 0.0001);
        assert_eq!(p.y, 3.0);
    }

    #[test]
    fn test_random_in_sphere_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Vec3::new(0.0, 6.0, 0.0);
        for _ in 0..500 {
            let p = random_in_sphere(&mut rng, center, 15.0);
            assert!(p.distance(&center) <= 15.0 + 0.001);
        }
    }

    #[test]
    fn test_shape_from_partial_yaml() {
        let shape: TreeShape = serde_yaml::from_str("height: 20.0").unwrap();
        assert_eq!(shape.height, 20.0);
        assert_eq!(shape.base_radius, 5.0);
    }
}
