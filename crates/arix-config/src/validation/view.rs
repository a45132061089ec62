//! Camera and window validation.

use crate::schema::ArixConfig;

use super::helpers::{validate_color_field, validate_range, validate_range_f64};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &ArixConfig) {
    let c = &config.camera;
    validate_range_f64(errors, "camera.fov_degrees", c.fov_degrees, 10.0, 120.0);
    validate_range_f64(errors, "camera.distance", c.distance, 1.0, 1000.0);
    validate_range_f64(errors, "camera.offset_y", c.offset_y, -100.0, 100.0);
    validate_range_f64(errors, "camera.near", c.near, 0.001, 10.0);
    if c.far <= c.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            c.far, c.near
        ));
    }
    validate_range_f64(errors, "camera.sway.speed", c.sway.speed, 0.0, 20.0);
    validate_range_f64(
        errors,
        "camera.sway.rotation_intensity",
        c.sway.rotation_intensity,
        0.0,
        4.0,
    );
    validate_range_f64(
        errors,
        "camera.sway.float_intensity",
        c.sway.float_intensity,
        0.0,
        10.0,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ArixConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 200, 16384);
    validate_range(errors, "window.height", w.height, 200, 16384);
    validate_color_field(errors, "window.clear_color", &w.clear_color);
}
