//! The bundled programs and the layouts the host code binds them with.

use std::mem::{offset_of, size_of};

use super::{AttributeDesc, ProgramLayout, ProgramSource, UniformBlockDesc, UniformMember};
use crate::camera::CameraUniforms;
use crate::instances::MaterialUniforms;
use crate::points::PointUniforms;

macro_rules! members {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        vec![$(UniformMember {
            name: stringify!($field),
            offset: offset_of!($ty, $field) as u32,
        }),*]
    };
}

fn camera_block() -> UniformBlockDesc {
    UniformBlockDesc {
        group: 0,
        binding: 0,
        size: size_of::<CameraUniforms>() as u32,
        members: members!(CameraUniforms { view, proj, resolution }),
    }
}

fn attr(name: &'static str, location: u32, format: wgpu::VertexFormat) -> AttributeDesc {
    AttributeDesc {
        name,
        location,
        format,
    }
}

/// Foliage point program.
pub fn points_program() -> ProgramSource {
    ProgramSource {
        name: "points",
        version: 1,
        source: include_str!("../shaders/points.wgsl"),
        layout: ProgramLayout {
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            attributes: vec![
                attr("scatter_pos", 0, wgpu::VertexFormat::Float32x3),
                attr("tree_pos", 1, wgpu::VertexFormat::Float32x3),
                attr("random", 2, wgpu::VertexFormat::Float32),
            ],
            uniforms: vec![
                camera_block(),
                UniformBlockDesc {
                    group: 1,
                    binding: 0,
                    size: size_of::<PointUniforms>() as u32,
                    members: members!(PointUniforms {
                        time,
                        progress,
                        noise_frequency,
                        noise_time_rate,
                        noise_amplitude,
                        noise_damping,
                        size_random,
                        size_base,
                        size_attenuation,
                        highlight_weight,
                        core_threshold,
                        core_mix,
                        alpha_scale,
                        easing,
                        color_base,
                        color_highlight,
                        color_core,
                    }),
                },
            ],
        },
    }
}

/// Ornament instance program.
pub fn instances_program() -> ProgramSource {
    ProgramSource {
        name: "instances",
        version: 1,
        source: include_str!("../shaders/instances.wgsl"),
        layout: ProgramLayout {
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            attributes: vec![
                attr("position", 0, wgpu::VertexFormat::Float32x3),
                attr("normal", 1, wgpu::VertexFormat::Float32x3),
                attr("model_0", 2, wgpu::VertexFormat::Float32x4),
                attr("model_1", 3, wgpu::VertexFormat::Float32x4),
                attr("model_2", 4, wgpu::VertexFormat::Float32x4),
                attr("model_3", 5, wgpu::VertexFormat::Float32x4),
                attr("color", 6, wgpu::VertexFormat::Float32x3),
            ],
            uniforms: vec![
                camera_block(),
                UniformBlockDesc {
                    group: 1,
                    binding: 0,
                    size: size_of::<MaterialUniforms>() as u32,
                    members: members!(MaterialUniforms {
                        light_dir,
                        eye,
                        emissive,
                        metalness,
                        roughness,
                        emissive_intensity,
                    }),
                },
            ],
        },
    }
}
