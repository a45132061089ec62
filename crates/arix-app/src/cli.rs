use std::path::PathBuf;

use clap::Parser;

/// Arix: a point-cloud tree that morphs between scattered and assembled.
#[derive(Parser, Debug)]
#[command(name = "arix", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed every distribution for a reproducible scene.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run this many frames at a fixed 1/60 s step without a window.
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Filter directive for a `--log-level` value. Bare level names are scoped
/// to the arix crates; anything else is passed through.
pub fn log_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error") => format!("arix={l}"),
        _ => level.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "arix",
            "--config",
            "/tmp/arix.toml",
            "--log-level",
            "debug",
            "--seed",
            "42",
            "--headless",
            "300",
            "--print-config",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/arix.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.headless, Some(300));
        assert!(args.print_config);
    }

    #[test]
    fn defaults_are_interactive() {
        let args = Args::parse_from(["arix"]);
        assert!(args.headless.is_none());
        assert!(args.seed.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn bare_levels_are_scoped() {
        assert_eq!(log_directive("DEBUG"), "arix=debug");
        assert_eq!(log_directive("arix_morph=trace"), "arix_morph=trace");
    }

    #[test]
    fn rejects_negative_seed() {
        assert!(Args::try_parse_from(["arix", "--seed", "-1"]).is_err());
    }
}
