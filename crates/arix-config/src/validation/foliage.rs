//! Foliage point-cloud validation.

use crate::schema::ArixConfig;

use super::helpers::{
    validate_color_field, validate_range, validate_range_f64, validate_scatter, validate_speed,
};
use super::MAX_FOLIAGE_COUNT;

pub(crate) fn validate_foliage(errors: &mut Vec<String>, config: &ArixConfig) {
    let f = &config.foliage;

    validate_range(errors, "foliage.count", f.count, 0, MAX_FOLIAGE_COUNT);
    validate_range_f64(errors, "foliage.tree.height", f.tree.height, 0.0, 1000.0);
    validate_range_f64(errors, "foliage.tree.base_radius", f.tree.base_radius, 0.0, 1000.0);
    validate_range_f64(errors, "foliage.tree.spiral_turns", f.tree.spiral_turns, 0.0, 1000.0);
    validate_range_f64(errors, "foliage.tree.fuzz", f.tree.fuzz, 0.0, 100.0);
    validate_scatter(errors, "foliage", &f.scatter);
    validate_speed(errors, "foliage.speed", f.speed);

    validate_range_f64(errors, "foliage.noise_frequency", f.noise_frequency, 0.0, 100.0);
    validate_range_f64(errors, "foliage.noise_time_rate", f.noise_time_rate, 0.0, 100.0);
    validate_range_f64(errors, "foliage.noise_amplitude", f.noise_amplitude, 0.0, 100.0);
    validate_range_f64(errors, "foliage.noise_damping", f.noise_damping, 0.0, 1.0);
    validate_range_f64(errors, "foliage.size_random", f.size_random, 0.0, 1000.0);
    validate_range_f64(errors, "foliage.size_base", f.size_base, 0.0, 1000.0);
    validate_range_f64(errors, "foliage.size_attenuation", f.size_attenuation, 0.0, 1000.0);

    validate_color_field(errors, "foliage.color_base", &f.color_base);
    validate_color_field(errors, "foliage.color_highlight", &f.color_highlight);
    validate_color_field(errors, "foliage.core_color", &f.core_color);
    validate_range_f64(errors, "foliage.highlight_weight", f.highlight_weight, 0.0, 1.0);
    validate_range_f64(errors, "foliage.core_threshold", f.core_threshold, 0.0, 1.0);
    validate_range_f64(errors, "foliage.core_mix", f.core_mix, 0.0, 1.0);
    validate_range_f64(errors, "foliage.alpha_scale", f.alpha_scale, 0.0, 1.0);
}
