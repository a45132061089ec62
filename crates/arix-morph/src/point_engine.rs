//! Host half of the foliage point population.
//!
//! The static attributes are uploaded once by whoever mounts the engine.
//! Per frame the engine only produces two scalars, elapsed time and
//! progress, and hands them to the mounted [`PointProgramBinding`]. All
//! per-point work happens in the vertex program.
//!
//! [`PointMorphEngine::vertex_position`] and [`PointMorphEngine::point_size`]
//! evaluate that program on the host. They are used for headless runs and
//! to test the device contract without a GPU.

use arix_config::schema::FoliageConfig;

use crate::distribution::PointDistribution;
use crate::easing::{ease, lerp3, EasingKind};
use crate::noise::simplex3;
use crate::progress::PopulationId;

/// Elapsed time wraps here (~6 hours) to keep noise input precise in f32.
///
/// A whole number of `2π` periods at every phase rate whose denominator
/// divides 10 (float, spin, pulse), so ornament motion stays continuous
/// across the wrap. The foliage noise field is not periodic in time and
/// shifts once per wrap.
pub const TIME_WRAP: f32 = std::f32::consts::TAU * 3440.0;

/// Smallest view-space depth used for size attenuation.
pub const MIN_VIEW_DEPTH: f32 = 1e-3;

/// The two frame-varying uniforms of the point program.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointFrame {
    pub elapsed_time: f32,
    pub progress: f32,
}

/// Device-side resource the point engine writes its per-frame uniforms into.
pub trait PointProgramBinding {
    fn write_frame(&mut self, frame: PointFrame);
}

/// Vertex program constants.
#[derive(Debug, Clone, PartialEq)]
pub struct PointParams {
    pub easing: EasingKind,
    pub noise_frequency: f32,
    pub noise_time_rate: f32,
    pub noise_amplitude: f32,
    pub noise_damping: f32,
    pub size_random: f32,
    pub size_base: f32,
    pub size_attenuation: f32,
}

impl PointParams {
    pub fn from_config(config: &FoliageConfig) -> Self {
        Self {
            easing: config.easing,
            noise_frequency: config.noise_frequency as f32,
            noise_time_rate: config.noise_time_rate as f32,
            noise_amplitude: config.noise_amplitude as f32,
            noise_damping: config.noise_damping as f32,
            size_random: config.size_random as f32,
            size_base: config.size_base as f32,
            size_attenuation: config.size_attenuation as f32,
        }
    }
}

impl Default for PointParams {
    fn default() -> Self {
        Self::from_config(&FoliageConfig::default())
    }
}

/// Owns the point population and drives its program uniforms.
pub struct PointMorphEngine<B> {
    id: PopulationId,
    distribution: PointDistribution,
    params: PointParams,
    elapsed: f32,
    last_frame: Option<PointFrame>,
    binding: Option<B>,
}

impl<B: PointProgramBinding> PointMorphEngine<B> {
    pub fn new(id: PopulationId, distribution: PointDistribution, params: PointParams) -> Self {
        Self {
            id,
            distribution,
            params,
            elapsed: 0.0,
            last_frame: None,
            binding: None,
        }
    }

    pub fn id(&self) -> PopulationId {
        self.id
    }

    pub fn distribution(&self) -> &PointDistribution {
        &self.distribution
    }

    pub fn params(&self) -> &PointParams {
        &self.params
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The last frame handed to the binding, if any.
    pub fn last_frame(&self) -> Option<PointFrame> {
        self.last_frame
    }

    /// Attach the device resource. Ticks are no-ops until this is called.
    pub fn mount(&mut self, binding: B) {
        tracing::debug!("{} mounted ({} points)", self.id, self.distribution.len());
        self.binding = Some(binding);
    }

    pub fn unmount(&mut self) -> Option<B> {
        self.binding.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.binding.is_some()
    }

    pub fn binding(&self) -> Option<&B> {
        self.binding.as_ref()
    }

    pub fn binding_mut(&mut self) -> Option<&mut B> {
        self.binding.as_mut()
    }

    /// Advance the clock by `dt` and write `progress` to the program.
    ///
    /// Does nothing while unmounted.
    pub fn tick(&mut self, dt: f32, progress: f32) {
        let Some(binding) = self.binding.as_mut() else {
            return;
        };

        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt) % TIME_WRAP;
        }

        let frame = PointFrame {
            elapsed_time: self.elapsed,
            progress,
        };
        binding.write_frame(frame);
        self.last_frame = Some(frame);
        tracing::trace!("{} t={:.3} p={:.4}", self.id, frame.elapsed_time, frame.progress);
    }

    /// World-space position of point `i`, as the vertex program computes it.
    pub fn vertex_position(&self, i: usize, progress: f32) -> Option<[f32; 3]> {
        let scatter = *self.distribution.scatter.get(i)?;
        let target = *self.distribution.target.get(i)?;
        Some(evaluate_position(
            &self.params,
            scatter,
            target,
            progress,
            self.elapsed,
        ))
    }

    /// Point size in pixels at view-space depth `view_z` (negative in front
    /// of the camera).
    pub fn point_size(&self, i: usize, view_z: f32) -> Option<f32> {
        let random = *self.distribution.random.get(i)?;
        Some(evaluate_size(&self.params, random, view_z))
    }

    /// Axis-aligned bounds of the whole cloud at `progress`.
    pub fn bounds(&self, progress: f32) -> Option<([f32; 3], [f32; 3])> {
        let mut points = (0..self.distribution.len()).filter_map(|i| self.vertex_position(i, progress));
        let first = points.next()?;
        Some(points.fold((first, first), |(mut lo, mut hi), p| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(p[axis]);
                hi[axis] = hi[axis].max(p[axis]);
            }
            (lo, hi)
        }))
    }
}

/// Position half of the vertex program: ease, interpolate, then perturb
/// with damped simplex noise.
pub fn evaluate_position(
    params: &PointParams,
    scatter: [f32; 3],
    target: [f32; 3],
    progress: f32,
    elapsed: f32,
) -> [f32; 3] {
    let e = ease(params.easing, progress);
    let pos = lerp3(scatter, target, e);

    let t = elapsed * params.noise_time_rate;
    let n = simplex3([
        pos[0] * params.noise_frequency + t,
        pos[1] * params.noise_frequency + t,
        pos[2] * params.noise_frequency + t,
    ]);
    let offset = n * params.noise_amplitude * (1.0 - progress * params.noise_damping);

    [pos[0] + offset, pos[1] + offset, pos[2] + offset]
}

/// Perspective-attenuated point size, guarded against zero depth.
pub fn evaluate_size(params: &PointParams, random: f32, view_z: f32) -> f32 {
    let depth = (-view_z).max(MIN_VIEW_DEPTH);
    (params.size_random * random + params.size_base) * (params.size_attenuation / depth)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use arix_config::schema::ScatterShellConfig;

    use crate::distribution::seeded_rng;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<PointFrame>,
    }

    impl PointProgramBinding for Recorder {
        fn write_frame(&mut self, frame: PointFrame) {
            self.frames.push(frame);
        }
    }

    fn engine(count: usize) -> PointMorphEngine<Recorder> {
        let config = FoliageConfig::default();
        let mut rng = seeded_rng(Some(17));
        let dist = PointDistribution::generate(
            count,
            &config.tree,
            &ScatterShellConfig::new(15.0, 15.0),
            &mut rng,
        );
        let mut reg = crate::progress::MorphRegistry::new();
        let id = reg.register(crate::progress::MorphState::new(
            Default::default(),
            2.0,
            Default::default(),
        ));
        PointMorphEngine::new(id, dist, PointParams::from_config(&config))
    }

    fn quiet(mut params: PointParams) -> PointParams {
        params.noise_amplitude = 0.0;
        params
    }

    #[test]
    fn unmounted_tick_is_a_no_op() {
        let mut e = engine(10);
        e.tick(0.5, 0.3);
        assert_eq!(e.elapsed(), 0.0);
        assert!(e.last_frame().is_none());
    }

    #[test]
    fn mounted_tick_writes_both_uniforms() {
        let mut e = engine(10);
        e.mount(Recorder::default());
        e.tick(0.25, 0.1);
        e.tick(0.25, 0.2);
        let frames = &e.binding().unwrap().frames;
        assert_eq!(frames.len(), 2);
        assert!((frames[1].elapsed_time - 0.5).abs() < 1e-6);
        assert!((frames[1].progress - 0.2).abs() < 1e-6);
    }

    #[test]
    fn unmount_stops_writes() {
        let mut e = engine(4);
        e.mount(Recorder::default());
        e.tick(0.1, 0.0);
        let rec = e.unmount().unwrap();
        e.tick(0.1, 0.0);
        assert_eq!(rec.frames.len(), 1);
        assert!(!e.is_mounted());
    }

    #[test]
    fn elapsed_time_wraps() {
        let mut e = engine(1);
        e.mount(Recorder::default());
        e.elapsed = TIME_WRAP - 1.0;
        e.tick(2.0, 0.0);
        assert!((e.elapsed() - 1.0).abs() < 1e-2);
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let mut e = engine(1);
        e.mount(Recorder::default());
        e.tick(1.0, 0.0);
        e.tick(-5.0, 0.0);
        assert!((e.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn endpoints_match_the_static_poses_without_noise() {
        let mut e = engine(200);
        e.params = quiet(e.params.clone());
        for i in 0..200 {
            let p0 = e.vertex_position(i, 0.0).unwrap();
            let p1 = e.vertex_position(i, 1.0).unwrap();
            for axis in 0..3 {
                assert!((p0[axis] - e.distribution.scatter[i][axis]).abs() < 1e-5);
                assert!((p1[axis] - e.distribution.target[i][axis]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn noise_is_damped_when_assembled() {
        let params = PointParams::default();
        let max_offset = |progress: f32| {
            let p = [3.0, 1.0, -2.0];
            let moved = evaluate_position(&params, p, p, progress, 1.7);
            (moved[0] - p[0]).abs()
        };
        // amplitude · (1 - 0.8) at full assembly
        assert!(max_offset(1.0) <= 0.2 * 0.2 * 1.1);
        assert!(max_offset(0.0) <= 0.2 * 1.1);
    }

    #[test]
    fn out_of_range_index_is_none() {
        let e = engine(3);
        assert!(e.vertex_position(3, 0.5).is_none());
        assert!(e.point_size(3, -10.0).is_none());
    }

    #[test]
    fn size_attenuates_with_depth() {
        let params = PointParams::default();
        let near = evaluate_size(&params, 0.5, -10.0);
        let far = evaluate_size(&params, 0.5, -20.0);
        // (15 · 0.5 + 5) · (10 / 10)
        assert!((near - 12.5).abs() < 1e-5);
        assert!((near - 2.0 * far).abs() < 1e-4);
    }

    #[test]
    fn size_survives_zero_depth() {
        let params = PointParams::default();
        assert!(evaluate_size(&params, 0.3, 0.0).is_finite());
        assert!(evaluate_size(&params, 0.3, 4.0).is_finite());
    }

    #[test]
    fn assembled_bounds_are_tighter_than_scattered() {
        let e = engine(500);
        let (lo0, hi0) = e.bounds(0.0).unwrap();
        let (lo1, hi1) = e.bounds(1.0).unwrap();
        assert!(hi0[0] - lo0[0] > hi1[0] - lo1[0]);
        assert!(engine(0).bounds(0.5).is_none());
    }
}
