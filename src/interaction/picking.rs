use crate::math::{Vec3, Mat4};

/// Information about a ray-panel intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    pub photo_id: u32,
    pub distance: f32,
    pub hit_point: Vec3,
}

/// Ray-based picking for selecting photo panels
///
/// Panels move every frame, so targets are handed in per pick rather than
/// cached: `(photo_id, current center)` pairs tested as bounding spheres.
pub struct RayPicker {
    radius: f32,
}

impl RayPicker {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Cast a ray from screen coordinates and find the closest panel
    #[allow(clippy::too_many_arguments)]
    pub fn pick(
        &self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
        view: &Mat4,
        projection: &Mat4,
        camera_pos: Vec3,
        targets: &[(u32, Vec3)],
    ) -> Option<HitInfo> {
        if screen_width <= 0.0 || screen_height <= 0.0 {
            return None;
        }

        // Convert screen to normalized device coordinates
        let ndc_x = (2.0 * screen_x / screen_width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height);

        let ray_dir = screen_to_world_ray(ndc_x, ndc_y, view, projection);
        self.pick_ray(camera_pos, ray_dir, targets)
    }

    /// Closest panel hit by a world-space ray
    pub fn pick_ray(&self, origin: Vec3, direction: Vec3, targets: &[(u32, Vec3)]) -> Option<HitInfo> {
        if !origin.is_finite() || !direction.is_finite() || direction.length_squared() == 0.0 {
            return None;
        }
        let direction = direction.normalize();

        let mut closest: Option<HitInfo> = None;
        for &(photo_id, center) in targets {
            if let Some(dist) = ray_sphere_intersect(origin, direction, center, self.radius) {
                if closest.map_or(true, |c| dist < c.distance) {
                    closest = Some(HitInfo {
                        photo_id,
                        distance: dist,
                        hit_point: origin + direction.scale(dist),
                    });
                }
            }
        }

        closest
    }
}

/// Convert normalized device coordinates to world ray direction
fn screen_to_world_ray(ndc_x: f32, ndc_y: f32, view: &Mat4, projection: &Mat4) -> Vec3 {
    let inv_proj = invert_perspective(projection);
    let inv_view = invert_view(view);

    // Point on the near plane, then as a view-space direction
    let ray_view = inv_proj.transform_point(Vec3::new(ndc_x, ndc_y, -1.0));
    let ray_view = Vec3::new(ray_view.x, ray_view.y, -1.0);

    inv_view.transform_direction(ray_view).normalize()
}

/// Ray-sphere intersection test; `ray_dir` must be normalized
fn ray_sphere_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    sphere_center: Vec3,
    sphere_radius: f32,
) -> Option<f32> {
    let oc = ray_origin - sphere_center;

    let b = oc.dot(&ray_dir);
    let c = oc.dot(&oc) - sphere_radius * sphere_radius;
    let discriminant = b * b - c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    if near > 0.0 {
        return Some(near);
    }
    let far = -b + sqrt_d;
    if far > 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Inverse of a standard perspective matrix
fn invert_perspective(m: &Mat4) -> Mat4 {
    let a = m.data[0];
    let b = m.data[5];
    let c = m.data[10];
    let d = m.data[14];
    let e = m.data[11];

    let mut inv = Mat4::identity();
    inv.data[0] = 1.0 / a;
    inv.data[5] = 1.0 / b;
    inv.data[10] = 0.0;
    inv.data[11] = 1.0 / d;
    inv.data[14] = 1.0 / e;
    inv.data[15] = -c / (d * e);

    inv
}

/// Inverse of an orthonormal view matrix (rotation + translation)
fn invert_view(m: &Mat4) -> Mat4 {
    let mut inv = Mat4::identity();

    // Transpose rotation part
    inv.data[0] = m.data[0];
    inv.data[1] = m.data[4];
    inv.data[2] = m.data[8];

    inv.data[4] = m.data[1];
    inv.data[5] = m.data[5];
    inv.data[6] = m.data[9];

    inv.data[8] = m.data[2];
    inv.data[9] = m.data[6];
    inv.data[10] = m.data[10];

    let tx = m.data[12];
    let ty = m.data[13];
    let tz = m.data[14];

    inv.data[12] = -(inv.data[0] * tx + inv.data[4] * ty + inv.data[8] * tz);
    inv.data[13] = -(inv.data[1] * tx + inv.data[5] * ty + inv.data[9] * tz);
    inv.data[14] = -(inv.data[2] * tx + inv.data[6] * ty + inv.data[10] * tz);

    inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> (Mat4, Mat4, Vec3) {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        let projection = Mat4::perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        (view, projection, eye)
    }

    #[test]
    fn test_ray_sphere_hit() {
        let result = ray_sphere_intersect(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert!((result.unwrap() - 9.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let away = ray_sphere_intersect(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(away.is_none());

        let beside = ray_sphere_intersect(
            Vec3::new(5.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(beside.is_none());
    }

    #[test]
    fn test_pick_center_of_screen() {
        let (view, projection, eye) = camera();
        let picker = RayPicker::new(1.0);
        let targets = [(2, Vec3::ZERO), (5, Vec3::new(4.0, 0.0, 0.0))];

        let hit = picker
            .pick(400.0, 300.0, 800.0, 600.0, &view, &projection, eye, &targets)
            .unwrap();
        assert_eq!(hit.photo_id, 2);
        assert!((hit.distance - 9.0).abs() < 0.01);
    }

    #[test]
    fn test_pick_prefers_closest() {
        let picker = RayPicker::new(0.5);
        let targets = [(1, Vec3::new(0.0, 0.0, -5.0)), (2, Vec3::new(0.0, 0.0, 2.0))];
        let hit = picker
            .pick_ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), &targets)
            .unwrap();
        assert_eq!(hit.photo_id, 2);
    }

    #[test]
    fn test_pick_empty_space() {
        let (view, projection, eye) = camera();
        let picker = RayPicker::new(1.0);
        let targets = [(2, Vec3::ZERO)];

        // Top-left corner looks well away from the origin
        let hit = picker.pick(0.0, 0.0, 800.0, 600.0, &view, &projection, eye, &targets);
        assert!(hit.is_none());
        assert!(picker.pick(1.0, 1.0, 0.0, 0.0, &view, &projection, eye, &targets).is_none());
    }

    #[test]
    fn test_pick_ray_rejects_degenerate_direction() {
        let picker = RayPicker::new(1.0);
        assert!(picker.pick_ray(Vec3::ZERO, Vec3::ZERO, &[(0, Vec3::ZERO)]).is_none());
    }
}
