//! Point population buffer and uniform types.

use arix_config::colors::linear_rgb_or;
use arix_config::schema::{EasingKind, FoliageConfig};
use arix_morph::PointDistribution;

/// Static per-point attributes, uploaded once.
///
/// Layout: scatter_pos(vec3) + tree_pos(vec3) + random(f32) = 28 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub scatter_pos: [f32; 3],
    pub tree_pos: [f32; 3],
    pub random: f32,
}

impl PointInstance {
    /// Per-instance layout: one quad is drawn per point.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // scatter_pos: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // tree_pos: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // random: f32 at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 24,
                shader_location: 2,
            },
        ],
    };

    /// Interleave a distribution into upload order.
    pub fn from_distribution(dist: &PointDistribution) -> Vec<Self> {
        dist.scatter
            .iter()
            .zip(&dist.target)
            .zip(&dist.random)
            .map(|((&scatter_pos, &tree_pos), &random)| Self {
                scatter_pos,
                tree_pos,
                random,
            })
            .collect()
    }
}

/// Uniform block of the point program, matching WGSL `PointUniforms`.
///
/// Only `time` and `progress` change per frame; they lead the struct so a
/// frame update is a single 8-byte write.
///
/// Layout: 13 × f32 + u32 + 2 × f32 pad = 64 bytes, then three vec4 colors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub time: f32,
    pub progress: f32,
    pub noise_frequency: f32,
    pub noise_time_rate: f32,

    pub noise_amplitude: f32,
    pub noise_damping: f32,
    pub size_random: f32,
    pub size_base: f32,

    pub size_attenuation: f32,
    pub highlight_weight: f32,
    pub core_threshold: f32,
    pub core_mix: f32,

    pub alpha_scale: f32,
    /// 0 linear, 1 smoothstep, 2 cubic in-out.
    pub easing: u32,
    pub _pad: [f32; 2],

    /// Linear RGB, alpha unused.
    pub color_base: [f32; 4],
    pub color_highlight: [f32; 4],
    pub color_core: [f32; 4],
}

/// Program-side code for an easing curve.
pub fn easing_code(kind: EasingKind) -> u32 {
    match kind {
        EasingKind::Linear => 0,
        EasingKind::Smoothstep => 1,
        EasingKind::CubicInOut => 2,
    }
}

fn rgba(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}

impl PointUniforms {
    /// Constants from config; `time` and `progress` start at zero.
    pub fn from_config(config: &FoliageConfig) -> Self {
        Self {
            time: 0.0,
            progress: 0.0,
            noise_frequency: config.noise_frequency as f32,
            noise_time_rate: config.noise_time_rate as f32,
            noise_amplitude: config.noise_amplitude as f32,
            noise_damping: config.noise_damping as f32,
            size_random: config.size_random as f32,
            size_base: config.size_base as f32,
            size_attenuation: config.size_attenuation as f32,
            highlight_weight: config.highlight_weight as f32,
            core_threshold: config.core_threshold as f32,
            core_mix: config.core_mix as f32,
            alpha_scale: config.alpha_scale as f32,
            easing: easing_code(config.easing),
            _pad: [0.0; 2],
            color_base: rgba(linear_rgb_or(&config.color_base, [0.001, 0.04, 0.018])),
            color_highlight: rgba(linear_rgb_or(&config.color_highlight, [0.66, 0.43, 0.04])),
            color_core: rgba(linear_rgb_or(&config.core_color, [1.0, 1.0, 0.9])),
        }
    }
}

/// The frame-varying head of [`PointUniforms`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointFrameUniforms {
    pub time: f32,
    pub progress: f32,
}
