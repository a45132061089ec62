mod app_state;
mod cli;
mod clock;
mod headless;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use arix_common::ArixError;
use arix_config::ArixConfig;

/// Filter precedence: `--log-level`, then `RUST_LOG`, then the config.
fn init_logging(flag: Option<&str>, config_level: &str) {
    let filter = match flag {
        Some(level) => EnvFilter::try_new(cli::log_directive(level)).ok(),
        None => None,
    }
    .or_else(|| EnvFilter::try_from_default_env().ok())
    .unwrap_or_else(|| EnvFilter::new(config_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load(args: &cli::Args) -> ArixConfig {
    let mut config = arix_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("arix: config load failed, using defaults: {e}");
        ArixConfig::default()
    });
    if args.seed.is_some() {
        config.morph.seed = args.seed;
    }
    config
}

fn run_windowed(config: ArixConfig) -> Result<(), ArixError> {
    let event_loop = EventLoop::new().map_err(|e| ArixError::Window(e.to_string()))?;
    let mut app = app_state::ArixApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| ArixError::Window(e.to_string()))?;

    match app.take_init_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let config = load(&args);

    if args.print_config {
        println!("{}", arix_config::config_to_json(&config));
        return;
    }

    init_logging(args.log_level.as_deref(), config.logging.level.directive());
    tracing::info!("Arix v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    // Loader warnings predate the subscriber, so repeat them here.
    if let Err(e) = arix_config::validation::validate(&config) {
        tracing::warn!("{e} (using parsed values anyway)");
    }
    match config.morph.seed {
        Some(seed) => tracing::info!("Seed: {seed}"),
        None => tracing::debug!("No seed, distributions are drawn fresh"),
    }

    if let Some(frames) = args.headless {
        let report = headless::run(&config, frames);
        tracing::info!(
            "Headless run done: {} frames, foliage p={:.4}",
            report.frames,
            report.foliage_progress,
        );
        return;
    }

    if let Err(e) = run_windowed(config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
