//! Ornament mesh generation: unit UV sphere and unit cube.
//!
//! Both are plain triangle lists without an index buffer.

use arix_config::schema::OrnamentShape;

use super::types::MeshVertex;

/// Latitude bands and longitude segments of the ornament sphere.
pub const SPHERE_LAT: u32 = 16;
pub const SPHERE_LON: u32 = 24;

/// Generate a UV sphere of radius 1 centered at the origin.
///
/// Produces `n_lat * n_lon * 6` vertices. North pole is (0, 1, 0).
pub fn sphere_mesh(n_lat: u32, n_lon: u32) -> Vec<MeshVertex> {
    let n_lat = n_lat.max(2);
    let n_lon = n_lon.max(3);

    let mut vertices = Vec::with_capacity((n_lat * n_lon * 6) as usize);

    for lat in 0..n_lat {
        for lon in 0..n_lon {
            let p00 = sphere_point(lat, lon, n_lat, n_lon);
            let p10 = sphere_point(lat + 1, lon, n_lat, n_lon);
            let p01 = sphere_point(lat, lon + 1, n_lat, n_lon);
            let p11 = sphere_point(lat + 1, lon + 1, n_lat, n_lon);

            // unit sphere: normal == position
            for p in [p00, p10, p01, p10, p11, p01] {
                vertices.push(MeshVertex {
                    position: p,
                    normal: p,
                });
            }
        }
    }

    vertices
}

fn sphere_point(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> [f32; 3] {
    let theta = std::f32::consts::PI * (lat as f32) / (n_lat as f32);
    let phi = std::f32::consts::TAU * (lon as f32) / (n_lon as f32);
    [theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin()]
}

/// Generate a 1×1×1 cube centered at the origin with flat face normals.
pub fn cube_mesh() -> Vec<MeshVertex> {
    // (normal, u axis, v axis) per face, u × v == normal
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let corner = |su: f32, sv: f32| -> [f32; 3] {
            std::array::from_fn(|k| 0.5 * n[k] + 0.5 * su * u[k] + 0.5 * sv * v[k])
        };
        let c00 = corner(-1.0, -1.0);
        let c10 = corner(1.0, -1.0);
        let c11 = corner(1.0, 1.0);
        let c01 = corner(-1.0, 1.0);
        for p in [c00, c10, c11, c00, c11, c01] {
            vertices.push(MeshVertex {
                position: p,
                normal: n,
            });
        }
    }
    vertices
}

/// The mesh a layer of `shape` is drawn with.
pub fn mesh_for(shape: OrnamentShape) -> Vec<MeshVertex> {
    match shape {
        OrnamentShape::Sphere => sphere_mesh(SPHERE_LAT, SPHERE_LON),
        OrnamentShape::Cube => cube_mesh(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn sphere_vertex_count() {
        assert_eq!(sphere_mesh(4, 8).len(), 192);
        assert_eq!(mesh_for(OrnamentShape::Sphere).len(), (16 * 24 * 6) as usize);
    }

    #[test]
    fn sphere_has_unit_radius() {
        for v in sphere_mesh(6, 10) {
            let r = dot(v.position, v.position).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn sphere_minimum_clamp() {
        assert_eq!(sphere_mesh(1, 1).len(), (2 * 3 * 6) as usize);
    }

    #[test]
    fn cube_has_36_vertices_inside_the_unit_box() {
        let cube = cube_mesh();
        assert_eq!(cube.len(), 36);
        for v in &cube {
            for k in 0..3 {
                assert!((v.position[k].abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn cube_vertices_lie_on_their_face() {
        for v in cube_mesh() {
            assert!((dot(v.position, v.normal) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_triangles_wind_outward() {
        let cube = cube_mesh();
        for tri in cube.chunks(3) {
            let face = cross(
                sub(tri[1].position, tri[0].position),
                sub(tri[2].position, tri[0].position),
            );
            assert!(dot(face, tri[0].normal) > 0.0);
        }
    }

    #[test]
    fn mesh_vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        assert_eq!(bytemuck::bytes_of(&cube_mesh()[0]).len(), 24);
    }
}
