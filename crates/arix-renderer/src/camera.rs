//! Fixed perspective camera looking down -Z at the tree.
//!
//! The whole tree group bobs and tilts slowly ([`GroupSway`]); the sway is
//! folded into the view matrix so both programs pick it up unchanged.

use arix_config::schema::{CameraConfig, SwayConfig};
use arix_morph::matrix::{self, Mat4};

use crate::gpu::PhysicalSize;

/// Camera block shared by both programs at `@group(0) @binding(0)`.
///
/// Layout: view(mat4) + proj(mat4) + resolution(vec2) + pad = 144 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: Mat4,
    pub proj: Mat4,
    /// Framebuffer size in physical pixels.
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

/// Periodic float of the tree group around its own origin.
///
/// With `phase = elapsed * speed / 4`, tilts by `(cos, sin, sin * 0.4) / 8`
/// times `rotation` about x, y, z and rises by `sin / 10` times `float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSway {
    pub speed: f32,
    pub rotation: f32,
    pub float: f32,
}

impl GroupSway {
    pub const STILL: Self = Self {
        speed: 0.0,
        rotation: 0.0,
        float: 0.0,
    };

    pub fn from_config(config: &SwayConfig) -> Self {
        Self {
            speed: config.speed as f32,
            rotation: config.rotation_intensity as f32,
            float: config.float_intensity as f32,
        }
    }

    /// Group-local to world at `elapsed` seconds.
    pub fn transform(&self, elapsed: f32) -> Mat4 {
        let (s, c) = (elapsed * self.speed * 0.25).sin_cos();
        let euler = [
            c / 8.0 * self.rotation,
            s / 8.0 * self.rotation,
            s / 20.0 * self.rotation,
        ];
        matrix::compose_trs([0.0, s / 10.0 * self.float, 0.0], euler, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub fov_y: f32,
    pub distance: f32,
    pub offset_y: f32,
    pub near: f32,
    pub far: f32,
    pub sway: GroupSway,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            fov_y: (config.fov_degrees as f32).to_radians(),
            distance: config.distance as f32,
            offset_y: config.offset_y as f32,
            near: config.near as f32,
            far: config.far as f32,
            sway: GroupSway::from_config(&config.sway),
        }
    }

    /// World to view. The group offset is folded in so every population
    /// shares it.
    pub fn view(&self) -> Mat4 {
        matrix::translate(0.0, self.offset_y, -self.distance)
    }

    /// [`Camera::view`] with the group sway at `elapsed` applied first.
    pub fn view_at(&self, elapsed: f32) -> Mat4 {
        matrix::mul(&self.view(), &self.sway.transform(elapsed))
    }

    pub fn projection(&self, size: PhysicalSize) -> Mat4 {
        matrix::perspective(self.fov_y, size.aspect(), self.near, self.far)
    }

    /// World-space eye position.
    pub fn eye(&self) -> [f32; 3] {
        [0.0, -self.offset_y, self.distance]
    }

    pub fn uniforms(&self, size: PhysicalSize, elapsed: f32) -> CameraUniforms {
        CameraUniforms {
            view: self.view_at(elapsed),
            proj: self.projection(size),
            resolution: [size.width.max(1) as f32, size.height.max(1) as f32],
            _pad: [0.0; 2],
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    const SIZE: PhysicalSize = PhysicalSize {
        width: 1280,
        height: 800,
    };

    #[test]
    fn camera_uniforms_layout() {
        assert_eq!(size_of::<CameraUniforms>(), 144);
        assert_eq!(offset_of!(CameraUniforms, proj), 64);
        assert_eq!(offset_of!(CameraUniforms, resolution), 128);
    }

    #[test]
    fn origin_sits_in_front_of_the_camera() {
        let cam = Camera::default();
        let v = matrix::transform_point(&cam.view(), [0.0, 0.0, 0.0]);
        assert!((v[2] + 35.0).abs() < 1e-5);
        assert!((v[1] + 2.0).abs() < 1e-5);
    }

    #[test]
    fn origin_projects_inside_the_depth_range() {
        let cam = Camera::default();
        let u = cam.uniforms(SIZE, 0.0);
        let clip = matrix::transform_point(&u.proj, [0.0, 0.0, -35.0]);
        let depth = clip[2] / clip[3];
        assert!(depth > 0.0 && depth < 1.0, "ndc depth {depth}");
        assert!((clip[3] - 35.0).abs() < 1e-4);
    }

    #[test]
    fn assembled_tree_fits_the_view() {
        let cam = Camera::default();
        let vp = matrix::mul(&cam.projection(SIZE), &cam.view());
        // apex and base rim of the default tree
        for p in [[0.0, 7.0, 0.0], [5.0, -7.0, 0.0], [-5.0, -7.0, 0.0]] {
            let clip = matrix::transform_point(&vp, p);
            let ndc = [clip[0] / clip[3], clip[1] / clip[3]];
            assert!(ndc[0].abs() < 1.0 && ndc[1].abs() < 1.0, "{p:?} -> {ndc:?}");
        }
    }

    #[test]
    fn resolution_never_zero() {
        let u = Camera::default().uniforms(
            PhysicalSize {
                width: 0,
                height: 0,
            },
            0.0,
        );
        assert_eq!(u.resolution, [1.0, 1.0]);
    }

    #[test]
    fn still_sway_leaves_the_view_alone() {
        let cam = Camera {
            sway: GroupSway::STILL,
            ..Camera::default()
        };
        for t in [0.0, 1.7, 40.0] {
            assert_eq!(cam.view_at(t), cam.view());
        }
    }

    #[test]
    fn sway_bobs_and_tilts_within_bounds() {
        let sway = Camera::default().sway;
        let mut max_rise = 0.0f32;
        for step in 0..400 {
            let t = step as f32 * 0.05;
            let m = sway.transform(t);
            // origin moves only vertically, by at most 0.1 * float
            assert!(m[12].abs() < 1e-6 && m[14].abs() < 1e-6);
            assert!(m[13].abs() <= 0.1 * sway.float + 1e-6);
            max_rise = max_rise.max(m[13]);
            // tilt of the local up axis stays under (1/8) * rotation per axis
            let up_x = m[4];
            assert!(up_x.abs() <= (0.125 * sway.rotation).sin() * 1.5 + 1e-6);
        }
        assert!(max_rise > 0.9 * 0.1 * sway.float, "never rose: {max_rise}");
    }

    #[test]
    fn sway_moves_the_apex_on_screen() {
        let cam = Camera::default();
        let apex = [0.0, 7.0, 0.0];
        let a = matrix::transform_point(&cam.view_at(0.0), apex);
        let b = matrix::transform_point(&cam.view_at(3.0), apex);
        assert!((a[0] - b[0]).abs() + (a[1] - b[1]).abs() > 1e-3);
    }

    #[test]
    fn sway_survives_the_time_wrap() {
        use arix_morph::point_engine::TIME_WRAP;

        let sway = Camera::default().sway;
        let before = sway.transform(TIME_WRAP - 1e-3);
        let after = sway.transform(0.0);
        for k in 0..16 {
            assert!((before[k] - after[k]).abs() < 1e-3, "entry {k}");
        }
    }

    #[test]
    fn eye_matches_view_translation() {
        let cam = Camera::default();
        let eye = cam.eye();
        let v = matrix::transform_point(&cam.view(), eye);
        assert!(v[0].abs() < 1e-5 && v[1].abs() < 1e-5 && v[2].abs() < 1e-5);
    }
}
