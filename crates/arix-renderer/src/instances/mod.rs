//! Ornament layers: meshes, per-layer material, and the instanced pipeline.

mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
