//! Window-bound rendering: device context, camera, depth, and both
//! population pipelines.

mod frame;
mod helpers;
mod state;

pub use helpers::clear_color;
pub use state::RenderState;
