//! Ornament mesh and material types and their buffer layouts.

use arix_config::colors::linear_rgb_or;
use arix_config::schema::OrnamentMaterialConfig;

/// A single vertex of an ornament mesh.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// Per-instance model matrix, four column attributes at locations 2..=5.
pub const TRANSFORM_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: 2,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 16,
            shader_location: 3,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 32,
            shader_location: 4,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 48,
            shader_location: 5,
        },
    ],
};

/// Per-instance linear RGB, uploaded once per layer.
pub const COLOR_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: 12,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 6,
    }],
};

/// Directional light toward the key light at (10, 20, 10).
pub const LIGHT_DIR: [f32; 3] = [10.0, 20.0, 10.0];

/// Material block at `@group(1) @binding(0)`, one per layer.
///
/// Layout: light_dir(vec4) + eye(vec4) + emissive(vec4) + 4 × f32 = 64 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    pub light_dir: [f32; 4],
    pub eye: [f32; 4],
    /// Linear RGB glow color; `w` unused.
    pub emissive: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
    /// Zero turns the glow off.
    pub emissive_intensity: f32,
    pub _pad: f32,
}

impl MaterialUniforms {
    pub fn new(config: &OrnamentMaterialConfig, eye: [f32; 3]) -> Self {
        Self {
            light_dir: [LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2], 0.0],
            eye: [eye[0], eye[1], eye[2], 1.0],
            emissive: {
                let [r, g, b] = linear_rgb_or(&config.emissive, [0.0; 3]);
                [r, g, b, 0.0]
            },
            metalness: config.metalness.clamp(0.0, 1.0) as f32,
            roughness: config.roughness.clamp(0.0, 1.0) as f32,
            emissive_intensity: config.emissive_intensity.max(0.0) as f32,
            _pad: 0.0,
        }
    }
}
