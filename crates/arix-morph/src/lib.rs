//! Dual-state morph core.
//!
//! Generates the scattered and assembled poses of every population, drives
//! one progress value per population from the shared [`StateSignal`], and
//! produces per-frame output for the renderer: two uniform scalars for the
//! foliage point cloud, and a batched transform buffer for each ornament
//! layer.
//!
//! Nothing in this crate touches a GPU. The device-side half of the point
//! population plugs in through [`PointProgramBinding`].
//!
//! [`StateSignal`]: arix_common::StateSignal

pub mod distribution;
pub mod easing;
pub mod instance_engine;
pub mod matrix;
pub mod noise;
pub mod point_engine;
pub mod progress;
pub mod scene;

pub use distribution::{OrnamentDistribution, PointDistribution};
pub use instance_engine::{InstanceMorphEngine, MotionParams};
pub use point_engine::{PointFrame, PointMorphEngine, PointParams, PointProgramBinding};
pub use progress::{MorphRegistry, MorphState, PopulationId};
pub use scene::MorphScene;
