//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#D4AF37").unwrap();
    assert_eq!(c, Color::from_rgba(212, 175, 55, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#02382580").unwrap();
    assert_eq!(c, Color::from_rgba(2, 56, 37, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#fff").unwrap();
    assert_eq!(c, Color::from_rgba(255, 255, 255, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.5)").unwrap();
    assert_eq!(c.g, 212);
    assert_eq!(c.a, 128);
}

#[test]
fn parse_rgb_without_alpha_is_opaque() {
    let c = parse_color("rgb(139, 0, 0)").unwrap();
    assert_eq!(c, Color::from_rgba(139, 0, 0, 255));
}

#[test]
fn parse_rgba_alpha_out_of_range() {
    assert!(parse_color("rgba(0,0,0,1.5)").is_err());
    assert!(parse_color("rgba(0,0,0,300)").is_err());
}

#[test]
fn parse_invalid_formats() {
    assert!(parse_color("#12").is_err());
    assert!(parse_color("gold").is_err());
    assert!(parse_color("").is_err());
}

#[test]
fn validate_color_accepts_palette_entries() {
    for s in ["#F9A602", "#FFD700", "#DAA520", "#C5B358", "#8B0000", "#560319"] {
        assert!(validate_color(s), "{s} should validate");
    }
}

#[test]
fn validate_color_rejects_garbage() {
    assert!(!validate_color(""));
    assert!(!validate_color("#GGGGGG"));
    assert!(!validate_color("hsl(0, 0%, 0%)"));
}

#[test]
fn linear_rgb_or_uses_fallback_on_bad_input() {
    let c = linear_rgb_or("not-a-color", [0.1, 0.2, 0.3]);
    assert_eq!(c, [0.1, 0.2, 0.3]);
}

#[test]
fn linear_rgb_or_converts_white() {
    let c = linear_rgb_or("#ffffff", [0.0; 3]);
    for ch in c {
        assert!((ch - 1.0).abs() < 1e-6);
    }
}
