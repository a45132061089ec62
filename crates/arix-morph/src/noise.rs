//! 3D simplex noise, the same algorithm as `simplex3` in `points.wgsl`.
//!
//! The host copy exists so the vertex program can be evaluated off the GPU
//! (headless runs, tests). Keep both in sync.

const C_X: f32 = 1.0 / 6.0;
const C_Y: f32 = 1.0 / 3.0;
const N_: f32 = 0.142_857_142_857;

#[inline]
fn mod289(x: f32) -> f32 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: f32) -> f32 {
    1.792_842_9 - 0.853_734_7 * r
}

/// `step(edge, x)` as defined by shading languages: 1 when `x >= edge`.
#[inline]
fn step(edge: f32, x: f32) -> f32 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Sample 3D simplex noise. Output lies roughly in `[-1, 1]`.
pub fn simplex3(v: [f32; 3]) -> f32 {
    // Skew into simplex space and find the containing cell.
    let s = (v[0] + v[1] + v[2]) * C_Y;
    let i = [(v[0] + s).floor(), (v[1] + s).floor(), (v[2] + s).floor()];
    let t = (i[0] + i[1] + i[2]) * C_X;
    let x0 = [v[0] - i[0] + t, v[1] - i[1] + t, v[2] - i[2] + t];

    // Rank the components to pick the two middle corners.
    let g = [step(x0[1], x0[0]), step(x0[2], x0[1]), step(x0[0], x0[2])];
    let l = [1.0 - g[0], 1.0 - g[1], 1.0 - g[2]];
    let i1 = [g[0].min(l[2]), g[1].min(l[0]), g[2].min(l[1])];
    let i2 = [g[0].max(l[2]), g[1].max(l[0]), g[2].max(l[1])];

    let corners = [
        ([0.0, 0.0, 0.0], x0),
        (
            i1,
            [x0[0] - i1[0] + C_X, x0[1] - i1[1] + C_X, x0[2] - i1[2] + C_X],
        ),
        (
            i2,
            [x0[0] - i2[0] + C_Y, x0[1] - i2[1] + C_Y, x0[2] - i2[2] + C_Y],
        ),
        ([1.0, 1.0, 1.0], [x0[0] - 0.5, x0[1] - 0.5, x0[2] - 0.5]),
    ];

    let i = [mod289(i[0]), mod289(i[1]), mod289(i[2])];
    let ns = [N_ * 2.0, N_ * 0.5 - 1.0, N_];

    let mut total = 0.0;
    for (offset, x) in corners {
        let p = permute(permute(permute(i[2] + offset[2]) + i[1] + offset[1]) + i[0] + offset[0]);

        // Map the hash onto a gradient on the surface of an octahedron.
        let j = p - 49.0 * (p * ns[2] * ns[2]).floor();
        let gx_ = (j * ns[2]).floor();
        let gy_ = (j - 7.0 * gx_).floor();
        let gx = gx_ * ns[0] + ns[1];
        let gy = gy_ * ns[0] + ns[1];
        let h = 1.0 - gx.abs() - gy.abs();

        let sh = -step(h, 0.0);
        let gx = gx + (gx.floor() * 2.0 + 1.0) * sh;
        let gy = gy + (gy.floor() * 2.0 + 1.0) * sh;

        let grad = [gx, gy, h];
        let norm = taylor_inv_sqrt(dot3(grad, grad));
        let grad = [grad[0] * norm, grad[1] * norm, grad[2] * norm];

        let m = (0.6 - dot3(x, x)).max(0.0);
        let m = m * m;
        total += m * m * dot3(grad, x);
    }

    42.0 * total
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> impl Iterator<Item = [f32; 3]> {
        (0..20).flat_map(|a| {
            (0..20).map(move |b| {
                [
                    a as f32 * 0.37 - 3.0,
                    b as f32 * 0.29 + 1.5,
                    (a * b) as f32 * 0.013 - 0.7,
                ]
            })
        })
    }

    #[test]
    fn deterministic() {
        let p = [1.25, -3.5, 7.75];
        assert_eq!(simplex3(p), simplex3(p));
    }

    #[test]
    fn stays_in_nominal_range() {
        for p in sample_grid() {
            let n = simplex3(p);
            assert!(n.is_finite());
            assert!(n.abs() <= 1.1, "simplex3({p:?}) = {n}");
        }
    }

    #[test]
    fn is_continuous() {
        for p in sample_grid() {
            let q = [p[0] + 1e-3, p[1], p[2] - 1e-3];
            assert!((simplex3(p) - simplex3(q)).abs() < 0.05, "jump at {p:?}");
        }
    }

    #[test]
    fn is_not_constant() {
        let (mut lo, mut hi) = (f32::MAX, f32::MIN);
        for p in sample_grid() {
            let n = simplex3(p);
            lo = lo.min(n);
            hi = hi.max(n);
        }
        assert!(hi - lo > 0.5, "range {lo}..{hi}");
    }

    #[test]
    fn lattice_origin_is_finite() {
        assert!(simplex3([0.0, 0.0, 0.0]).is_finite());
        assert!(simplex3([289.0, -289.0, 578.0]).is_finite());
    }

    #[test]
    fn step_matches_shading_language() {
        assert_eq!(step(0.5, 0.5), 1.0);
        assert_eq!(step(0.5, 0.49), 0.0);
        assert_eq!(step(0.0, 0.0), 1.0);
    }
}
