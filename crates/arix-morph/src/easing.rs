//! Interpolation and easing curves.
//!
//! The foliage and the ornaments deliberately ease differently: smoothstep
//! for the point cloud, cubic ease-in-out for the solid ornaments. The curve
//! is per-population configuration, see [`EasingKind`].

pub use arix_config::schema::EasingKind;

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two points.
#[inline]
pub fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// Hermite smoothstep, identical to the shading-language builtin.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic ease-in-out: `4p³` below one half, mirrored above.
#[inline]
pub fn cubic_in_out(p: f32) -> f32 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Remap a progress value through the given curve.
#[inline]
pub fn ease(kind: EasingKind, p: f32) -> f32 {
    match kind {
        EasingKind::Linear => p,
        EasingKind::Smoothstep => smoothstep(0.0, 1.0, p),
        EasingKind::CubicInOut => cubic_in_out(p),
    }
}

// =============================================================================
// Tests
// =============================================================================
