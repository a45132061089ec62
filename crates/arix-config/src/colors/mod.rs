//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgba(r,g,b,a)` formats.
//! In the `rgba()` format, the alpha component can be either 0-255 (integer)
//! or 0.0-1.0 (float), matching CSS conventions.

mod parse;

#[cfg(test)]
mod tests;

use arix_common::types::Color;
use arix_common::ConfigError;

use parse::{parse_hex, parse_rgba, HEX_RE, RGBA_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        if let Some(color) = parse_rgba(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Parse a color string straight to linear RGB, falling back to `fallback`
/// (already linear) with a warning when the string is malformed.
pub fn linear_rgb_or(s: &str, fallback: [f32; 3]) -> [f32; 3] {
    match parse_color(s) {
        Ok(c) => c.to_linear_rgb(),
        Err(e) => {
            tracing::warn!("{e}, using fallback color");
            fallback
        }
    }
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    false
}
