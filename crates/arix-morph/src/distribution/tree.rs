//! Assembled pose: the spiral cone for points, the solid cone for ornaments.

use std::f32::consts::TAU;

use arix_config::schema::{ConeConfig, OrnamentPlacement, SpiralTreeConfig};
use rand::Rng;

/// Point `i` of `count` on the foliage spiral, with box jitter of width
/// `tree.fuzz` on every axis. `count` must be non-zero.
pub fn spiral_point<R: Rng + ?Sized>(
    i: usize,
    count: usize,
    tree: &SpiralTreeConfig,
    rng: &mut R,
) -> [f32; 3] {
    let height = tree.height as f32;
    let fuzz = tree.fuzz as f32;

    let t = i as f32 / count as f32;
    let angle = t * tree.spiral_turns as f32 * TAU;
    let y = t * height - height / 2.0;
    let radius = (1.0 - t) * tree.base_radius as f32;

    let fuzz_x = (rng.gen::<f32>() - 0.5) * fuzz;
    let fuzz_z = (rng.gen::<f32>() - 0.5) * fuzz;
    let fuzz_y = (rng.gen::<f32>() - 0.5) * fuzz;

    [
        radius * angle.cos() + fuzz_x,
        y + fuzz_y,
        radius * angle.sin() + fuzz_z,
    ]
}

/// Radius biased toward the cone's silhouette: `[0.8, 1.1)` of the local radius.
#[inline]
pub fn edge_radius(radius_at_height: f32, u: f32) -> f32 {
    radius_at_height * (0.8 + u * 0.3)
}

/// Area-uniform radius within the disc at that height.
#[inline]
pub fn disc_radius(radius_at_height: f32, u: f32) -> f32 {
    radius_at_height * u.max(0.0).sqrt()
}

/// A random point on the ornament cone.
pub fn cone_point<R: Rng + ?Sized>(
    cone: &ConeConfig,
    placement: OrnamentPlacement,
    rng: &mut R,
) -> [f32; 3] {
    let height = cone.height as f32;

    let t = rng.gen::<f32>();
    let y = t * height - height / 2.0;
    let radius_at_height = (1.0 - t) * cone.base_radius as f32;

    let angle = rng.gen::<f32>() * TAU;
    let u = rng.gen::<f32>();
    let r = match placement {
        OrnamentPlacement::Edge => edge_radius(radius_at_height, u),
        OrnamentPlacement::Disc => disc_radius(radius_at_height, u),
    };

    [r * angle.cos(), y, r * angle.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spiral_without_fuzz_starts_at_base_radius() {
        let tree = SpiralTreeConfig {
            fuzz: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let p = spiral_point(0, 100, &tree, &mut rng);
        assert!((p[0] - 5.0).abs() < 1e-6);
        assert!((p[1] + 7.0).abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn spiral_narrows_toward_the_tip() {
        let tree = SpiralTreeConfig {
            fuzz: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let radius = |p: [f32; 3]| (p[0] * p[0] + p[2] * p[2]).sqrt();
        let low = spiral_point(100, 1000, &tree, &mut rng);
        let high = spiral_point(900, 1000, &tree, &mut rng);
        assert!(radius(low) > radius(high));
        assert!(low[1] < high[1]);
    }

    #[test]
    fn fuzz_stays_within_half_amplitude() {
        let tree = SpiralTreeConfig::default();
        let bare = SpiralTreeConfig {
            fuzz: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut bare_rng = StdRng::seed_from_u64(3);
        for i in 0..500 {
            let p = spiral_point(i, 500, &tree, &mut rng);
            let q = spiral_point(i, 500, &bare, &mut bare_rng);
            for axis in 0..3 {
                assert!((p[axis] - q[axis]).abs() <= 0.25 + 1e-5);
            }
        }
    }

    #[test]
    fn edge_radius_bounds() {
        assert!((edge_radius(5.0, 0.0) - 4.0).abs() < 1e-6);
        assert!((edge_radius(5.0, 1.0) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn disc_radius_bounds() {
        assert_eq!(disc_radius(5.0, 0.0), 0.0);
        assert!((disc_radius(5.0, 1.0) - 5.0).abs() < 1e-6);
        assert!((disc_radius(4.0, 0.25) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn cone_points_respect_the_local_radius() {
        let cone = ConeConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let p = cone_point(&cone, OrnamentPlacement::Disc, &mut rng);
            let t = (p[1] + 7.0) / 14.0;
            let local = (1.0 - t) * 5.5;
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((0.0..=1.0 + 1e-5).contains(&t));
            assert!(r <= local + 1e-4);
        }
    }
}
