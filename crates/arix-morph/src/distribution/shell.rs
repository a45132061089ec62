//! Scattered pose: uniform sampling inside a spherical shell.

use std::f32::consts::TAU;

use arix_config::schema::ScatterShellConfig;
use rand::Rng;

/// Draw one point from the shell `inner_radius ..= inner_radius + span`.
///
/// The inclination is drawn through its cosine, `cos φ = 2u - 1`, so the
/// density is uniform over the sphere rather than bunched at the poles.
/// Near the poles `sin φ` is clamped at zero instead of going non-finite.
pub fn sample_shell<R: Rng + ?Sized>(shell: &ScatterShellConfig, rng: &mut R) -> [f32; 3] {
    let r = shell.inner_radius as f32 + rng.gen::<f32>() * shell.span as f32;
    let theta = rng.gen::<f32>() * TAU;
    let cos_phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0);
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();

    [
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * cos_phi,
    ]
}
