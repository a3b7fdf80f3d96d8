use anyhow::Result;
use appearance::cli;
use appearance::config::{self, AppearanceConfig};
use appearance::context::{HostContext, StaticEnvironment};
use appearance::detect;
use appearance::emitter::LogEmitter;
use appearance::tracker::{AppearanceChange, AppearanceTracker, OverrideColorScheme};

/// Application entry point: parse command-line arguments, load the config
/// file if one is found, probe the host for its night-mode preference, and
/// print the resolved scheme.
fn main() -> Result<()> {
    // Parse command-line arguments first
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error parsing arguments: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logger (set RUST_LOG env var to control verbosity)
    let log_level = if cli_args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    // Explicit config path must load; discovered ones are best effort
    let config = match &cli_args.config {
        Some(path) => {
            if !cli_args.config_exists() {
                eprintln!("Error: config file '{}' does not exist", path.display());
                std::process::exit(1);
            }
            AppearanceConfig::from_file(path)?
        }
        None => match config::find_config_file() {
            Some(path) => AppearanceConfig::from_file(&path).unwrap_or_else(|e| {
                eprintln!("Warning: ignoring config at {}: {}", path.display(), e);
                AppearanceConfig::default()
            }),
            None => AppearanceConfig::default(),
        },
    };

    let night_mode = config.night_mode.unwrap_or_else(detect::system_night_mode);
    let environment = StaticEnvironment::new(HostContext::headless(night_mode));

    // A scheme pinned in the config acts as the override provider
    let override_scheme = config
        .scheme
        .map(|pinned| Box::new(move || pinned) as Box<dyn OverrideColorScheme>);

    let mut tracker = AppearanceTracker::with_override(environment, LogEmitter, override_scheme);
    let scheme = tracker.current_scheme();

    if cli_args.json {
        let payload = AppearanceChange {
            color_scheme: scheme,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", scheme);
    }

    Ok(())
}
