//! 4×4 matrix math for instance transforms and the camera.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection with a `[0, 1]` depth range.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Z axis.
pub fn rotate_z(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Uniform scale matrix.
pub fn scale(s: f32) -> Mat4 {
    [
        s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1), returning homogeneous coordinates.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, o) in out.iter_mut().enumerate() {
        *o = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

/// Translation × rotation × uniform scale in one pass.
///
/// `euler` is applied in XYZ order (`Rx · Ry · Rz`), equivalent to
/// `mul(translate, mul(rx, mul(ry, mul(rz, scale))))` without the
/// intermediate products. Used once per instance per frame.
pub fn compose_trs(position: [f32; 3], euler: [f32; 3], s: f32) -> Mat4 {
    let (b, a) = euler[0].sin_cos();
    let (d, c) = euler[1].sin_cos();
    let (f, e) = euler[2].sin_cos();

    let ae = a * e;
    let af = a * f;
    let be = b * e;
    let bf = b * f;

    [
        c * e * s,
        (af + be * d) * s,
        (bf - ae * d) * s,
        0.0,
        -c * f * s,
        (ae - bf * d) * s,
        (be + af * d) * s,
        0.0,
        d * s,
        -b * c * s,
        a * c * s,
        0.0,
        position[0],
        position[1],
        position[2],
        1.0,
    ]
}

// =============================================================================
// Tests
// =============================================================================
