use glam::{Mat4, Vec2, Vec3, Vec4};

/// Fixed look-at camera on the +Z axis facing the origin, as used by the
/// orbit layer.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub width: f32,
    pub height: f32,
    pub camera_z: f32,
    pub fovy: f32,
}

impl OrbitCamera {
    pub fn new(width: f32, height: f32, camera_z: f32, fovy: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            camera_z,
            fovy,
        }
    }

    fn view_proj(&self) -> Mat4 {
        let aspect = self.width / self.height;
        let proj = Mat4::perspective_rh(self.fovy, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.camera_z), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    /// World-space ray through the surface point `(sx, sy)` (CSS pixels,
    /// origin top-left). Returns `(ray_origin, ray_direction)`.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / self.width) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / self.height);
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = Vec3::new(0.0, 0.0, self.camera_z);
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }

    /// Where the ray through `(sx, sy)` meets the `z = 0` scene plane.
    pub fn screen_to_plane(&self, sx: f32, sy: f32) -> Option<Vec2> {
        let (ro, rd) = self.screen_to_world_ray(sx, sy);
        if rd.z.abs() <= 1e-6 {
            return None;
        }
        let t = -ro.z / rd.z;
        (t >= 0.0).then(|| (ro + rd * t).truncate())
    }

    /// Project a scene point to surface pixels. Also returns the pixel size of
    /// one scene unit at that depth. `None` behind the camera.
    pub fn project(&self, p: Vec3) -> Option<(Vec2, f32)> {
        let depth = self.camera_z - p.z;
        if depth <= 0.0 {
            return None;
        }
        let clip = self.view_proj() * p.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let screen = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        );
        let px_per_unit = (self.height * 0.5) / ((self.fovy * 0.5).tan() * depth);
        Some((screen, px_per_unit))
    }
}
