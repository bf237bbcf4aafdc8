mod app_state;
mod cli;
mod scene;

use kiln_common::ConfigError;
use kiln_config::schema::KilnConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "kiln=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Kiln crashed ---");
        if let Some(location) = info.location() {
            eprintln!("at {}:{}", location.file(), location.line());
        }
        eprintln!("--------------------\n");

        default_hook(info);
    }));
}

/// Load the config named on the command line, or the default one.
fn load_config(args: &cli::Args) -> (KilnConfig, Option<ConfigError>) {
    let loaded = match &args.config {
        Some(path) => kiln_config::load_config_from(path),
        None => kiln_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (KilnConfig::default(), Some(e)),
    }
}

/// Apply command-line overrides and validate the result again.
fn apply_overrides(config: &mut KilnConfig, args: &cli::Args) -> Result<(), ConfigError> {
    if let Some(max_quads) = args.max_quads {
        config.renderer.max_quads = max_quads;
        kiln_config::validation::validate(config)?;
    }
    Ok(())
}

/// Filter directive: CLI flag, then config, then the built-in default.
fn log_directive(args: &cli::Args, config: &KilnConfig) -> String {
    args.log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive())
}

fn main() {
    install_panic_hook();

    let args = cli::parse();
    let (mut config, config_error) = load_config(&args);
    if let Err(e) = apply_overrides(&mut config, &args) {
        eprintln!("kiln: {e}");
        std::process::exit(2);
    }

    if args.print_config {
        print!("{}", kiln_config::config_to_toml(&config));
        return;
    }

    let directive = log_directive(&args, &config);
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Kiln v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        max_quads = config.renderer.max_quads,
        projection = ?config.renderer.projection,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::KilnApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use kiln_config::schema::LogLevel;

    use super::*;

    #[test]
    fn cli_directive_wins_over_config() {
        let args = cli::Args::parse_from(["kiln", "--log-level", "kiln=trace"]);
        let mut config = KilnConfig::default();
        config.logging.level = LogLevel::Warn;
        assert_eq!(log_directive(&args, &config), "kiln=trace");
    }

    #[test]
    fn config_directive_used_without_flag() {
        let args = cli::Args::parse_from(["kiln"]);
        let mut config = KilnConfig::default();
        config.logging.level = LogLevel::Debug;
        assert_eq!(log_directive(&args, &config), "kiln=debug");
    }

    #[test]
    fn default_directive_matches_default_config() {
        let args = cli::Args::parse_from(["kiln"]);
        assert_eq!(log_directive(&args, &KilnConfig::default()), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn max_quads_flag_overrides_config() {
        let args = cli::Args::parse_from([
            "kiln",
            "--config",
            "/nonexistent/kiln.toml",
            "--max-quads",
            "64",
        ]);
        let (mut config, error) = load_config(&args);
        assert!(matches!(error, Some(ConfigError::FileNotFound(_))));
        apply_overrides(&mut config, &args).unwrap();
        assert_eq!(config.renderer.max_quads, 64);
    }

    #[test]
    fn out_of_range_max_quads_flag_is_rejected() {
        let args = cli::Args::parse_from(["kiln", "--max-quads", "1073741825"]);
        let mut config = KilnConfig::default();
        match apply_overrides(&mut config, &args) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("renderer.max_quads")),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn no_override_leaves_config_untouched() {
        let args = cli::Args::parse_from(["kiln"]);
        let mut config = KilnConfig::default();
        apply_overrides(&mut config, &args).unwrap();
        assert_eq!(
            config.renderer.max_quads,
            KilnConfig::default().renderer.max_quads
        );
    }
}
