//! wgpu rendering for the morph scene.
//!
//! The point population is drawn from a static per-point buffer plus two
//! frame-varying uniforms; ornament layers are drawn instanced from the
//! transform buffers the morph core fills each frame. Device programs are
//! WGSL resources validated against their binding layout before any
//! pipeline is built from them.

pub mod camera;
pub mod gpu;
pub mod instances;
pub mod points;
pub mod program;
pub mod render_state;

pub use camera::{Camera, CameraUniforms, GroupSway};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use instances::{InstancePipeline, MeshVertex};
pub use points::{PointInstance, PointPipeline, PointUniforms};
pub use program::{validate_program, ProgramError, ProgramLayout, ProgramSource, ValidatedProgram};
pub use render_state::RenderState;

/// Depth attachment format shared by every pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
