//! Shared range-validation helpers used by all domain validators.

use crate::colors::validate_color;
use crate::schema::ScatterShellConfig;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a recognized color string.
pub(crate) fn validate_color_field(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(format!("{name} = {value:?} is not a valid color"));
    }
}

pub(crate) fn validate_scatter(errors: &mut Vec<String>, prefix: &str, shell: &ScatterShellConfig) {
    validate_range_f64(
        errors,
        &format!("{prefix}.scatter.inner_radius"),
        shell.inner_radius,
        0.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        &format!("{prefix}.scatter.span"),
        shell.span,
        0.0,
        1000.0,
    );
}

/// Integrator speed must be positive for the morph to converge at all.
pub(crate) fn validate_speed(errors: &mut Vec<String>, name: &str, speed: f64) {
    if !speed.is_finite() || speed <= 0.0 || speed > 60.0 {
        errors.push(format!("{name} = {speed} is out of range (0, 60]"));
    }
}
