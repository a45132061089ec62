//! Ornament layer validation (counts, scale ranges, palettes, motion).

use crate::schema::ArixConfig;

use super::helpers::{
    validate_color_field, validate_range, validate_range_f64, validate_scatter, validate_speed,
};
use super::MAX_ORNAMENT_LAYER_COUNT;

pub(crate) fn validate_ornaments(errors: &mut Vec<String>, config: &ArixConfig) {
    for (i, layer) in config.ornaments.iter().enumerate() {
        let p = format!("ornaments[{i}]");

        if layer.name.trim().is_empty() {
            errors.push(format!("{p}.name must not be empty"));
        }
        if config.ornaments[..i].iter().any(|l| l.name == layer.name) {
            errors.push(format!("{p}.name {:?} is used by another layer", layer.name));
        }

        validate_range(
            errors,
            &format!("{p}.count"),
            layer.count,
            0,
            MAX_ORNAMENT_LAYER_COUNT,
        );
        validate_range_f64(errors, &format!("{p}.scale_min"), layer.scale_min, 0.0, 100.0);
        validate_range_f64(errors, &format!("{p}.scale_max"), layer.scale_max, 0.0, 100.0);
        if layer.scale_min > layer.scale_max {
            errors.push(format!(
                "{p}.scale_min = {} exceeds scale_max = {}",
                layer.scale_min, layer.scale_max
            ));
        }

        if layer.palette.is_empty() {
            errors.push(format!("{p}.palette must contain at least one color"));
        }
        for (j, color) in layer.palette.iter().enumerate() {
            validate_color_field(errors, &format!("{p}.palette[{j}]"), color);
        }

        validate_range_f64(errors, &format!("{p}.tree.height"), layer.tree.height, 0.0, 1000.0);
        validate_range_f64(
            errors,
            &format!("{p}.tree.base_radius"),
            layer.tree.base_radius,
            0.0,
            1000.0,
        );
        validate_scatter(errors, &p, &layer.scatter);
        validate_speed(errors, &format!("{p}.speed"), layer.speed);

        let m = &layer.motion;
        validate_range_f64(errors, &format!("{p}.motion.float_amplitude"), m.float_amplitude, 0.0, 10.0);
        validate_range_f64(errors, &format!("{p}.motion.spin_x"), m.spin_x, -20.0, 20.0);
        validate_range_f64(errors, &format!("{p}.motion.spin_y"), m.spin_y, -20.0, 20.0);
        validate_range_f64(errors, &format!("{p}.motion.pulsate_base"), m.pulsate_base, 0.0, 10.0);
        validate_range_f64(
            errors,
            &format!("{p}.motion.pulsate_amplitude"),
            m.pulsate_amplitude,
            0.0,
            10.0,
        );
        validate_range_f64(
            errors,
            &format!("{p}.motion.pulsate_frequency"),
            m.pulsate_frequency,
            0.0,
            100.0,
        );

        let mat = &layer.material;
        validate_range_f64(errors, &format!("{p}.material.metalness"), mat.metalness, 0.0, 1.0);
        validate_range_f64(errors, &format!("{p}.material.roughness"), mat.roughness, 0.0, 1.0);
        validate_range_f64(
            errors,
            &format!("{p}.material.emissive_intensity"),
            mat.emissive_intensity,
            0.0,
            50.0,
        );
        validate_color_field(errors, &format!("{p}.material.emissive"), &mat.emissive);
    }
}
