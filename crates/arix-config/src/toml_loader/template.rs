//! Default TOML config template with documentation comments.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> String {
    r##"# Arix Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[morph]
# initial_state = "scattered"   # scattered, assembled
# overshoot = "clamp_step"      # clamp_step, allow
# seed = 42                     # fixed seed; omit for a fresh draw each run

[foliage]
# count = 12000
# speed = 2.0
# easing = "smoothstep"         # linear, smoothstep, cubic_in_out
# noise_frequency = 0.5
# noise_time_rate = 0.5
# noise_amplitude = 0.2
# noise_damping = 0.8
# size_random = 15.0
# size_base = 5.0
# size_attenuation = 10.0
# color_base = "#023825"
# color_highlight = "#D4AF37"
# highlight_weight = 0.3
# core_color = "#FFFFF3"
# core_threshold = 0.2
# core_mix = 0.5
# alpha_scale = 0.9

[foliage.tree]
# height = 14.0
# base_radius = 5.0
# spiral_turns = 19.0986
# fuzz = 0.5

[foliage.scatter]
# inner_radius = 15.0
# span = 15.0

# Ornament layers. Declaring any [[ornaments]] table replaces the three
# built-in layers (baubles, gifts, lights).
#
# [[ornaments]]
# name = "baubles"
# count = 200                   # 0-2000, drawn on the CPU every frame
# shape = "sphere"              # sphere, cube
# scale_min = 0.2
# scale_max = 0.4
# palette = ["#F9A602", "#FFD700", "#DAA520", "#C5B358"]
# placement = "edge"            # edge, disc
# speed = 2.5
# easing = "cubic_in_out"
# tree = { height = 14.0, base_radius = 5.5 }
# scatter = { inner_radius = 20.0, span = 10.0 }
# motion = { float_amplitude = 0.2, spin_x = 0.2, spin_y = 0.3, pulsate_base = 0.8, pulsate_amplitude = 0.2, pulsate_frequency = 2.0 }
# material = { metalness = 1.0, roughness = 0.15, emissive = "#000000", emissive_intensity = 0.0 }

[camera]
# fov_degrees = 35.0
# distance = 35.0
# offset_y = -2.0
# near = 0.1
# far = 200.0

[camera.sway]
# speed = 2.0
# rotation_intensity = 0.1
# float_intensity = 0.2

[window]
# title = "Arix"
# width = 1280
# height = 800
# clear_color = "#020403"

[logging]
# level = "INFO"                # TRACE, DEBUG, INFO, WARN, ERROR
"##
    .to_string()
}
