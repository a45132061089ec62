//! Foliage point cloud: static instance buffer, uniforms, and pipeline.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use arix_config::schema::FoliageConfig;
    use arix_morph::distribution::seeded_rng;
    use arix_morph::PointDistribution;
    use std::mem::{offset_of, size_of};

    #[test]
    fn point_instance_is_28_bytes() {
        assert_eq!(size_of::<PointInstance>(), 28);
        assert_eq!(PointInstance::LAYOUT.array_stride, 28);
    }

    #[test]
    fn point_uniforms_layout() {
        assert_eq!(size_of::<PointUniforms>(), 112);
        assert_eq!(offset_of!(PointUniforms, easing), 52);
        assert_eq!(offset_of!(PointUniforms, color_base), 64);
        assert_eq!(offset_of!(PointUniforms, color_highlight), 80);
        assert_eq!(offset_of!(PointUniforms, color_core), 96);
    }

    #[test]
    fn frame_head_matches_uniform_prefix() {
        assert_eq!(size_of::<PointFrameUniforms>(), 8);
        assert_eq!(offset_of!(PointUniforms, time), offset_of!(PointFrameUniforms, time));
        assert_eq!(
            offset_of!(PointUniforms, progress),
            offset_of!(PointFrameUniforms, progress)
        );
    }

    #[test]
    fn uniforms_from_default_config() {
        let u = PointUniforms::from_config(&FoliageConfig::default());
        assert_eq!(u.easing, 1);
        assert!((u.size_random - 15.0).abs() < 1e-6);
        assert!((u.alpha_scale - 0.9).abs() < 1e-6);
        // #D4AF37 is mostly red-green
        assert!(u.color_highlight[0] > u.color_highlight[2]);
        assert_eq!(u.color_base[3], 1.0);
    }

    #[test]
    fn instances_interleave_the_distribution() {
        let config = FoliageConfig::default();
        let dist = PointDistribution::generate(
            10,
            &config.tree,
            &config.scatter,
            &mut seeded_rng(Some(3)),
        );
        let inst = PointInstance::from_distribution(&dist);
        assert_eq!(inst.len(), 10);
        assert_eq!(inst[4].scatter_pos, dist.scatter[4]);
        assert_eq!(inst[4].tree_pos, dist.target[4]);
        assert_eq!(inst[4].random, dist.random[4]);
    }
}
