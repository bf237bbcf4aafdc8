use std::path::PathBuf;

use clap::Parser;

/// Kiln: batched 2D quad renderer demo.
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `kiln=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override `renderer.max_quads` from the config.
    #[arg(long)]
    pub max_quads: Option<u32>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "kiln",
            "--config",
            "/tmp/kiln.toml",
            "--log-level",
            "kiln=trace",
            "--max-quads",
            "500",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/kiln.toml")));
        assert_eq!(args.log_level.as_deref(), Some("kiln=trace"));
        assert_eq!(args.max_quads, Some(500));
        assert!(!args.print_config);
    }

    #[test]
    fn no_flags_is_all_defaults() {
        let args = Args::parse_from(["kiln"]);
        assert!(args.config.is_none());
        assert!(args.max_quads.is_none());
    }

    #[test]
    fn max_quads_must_be_numeric() {
        assert!(Args::try_parse_from(["kiln", "--max-quads", "lots"]).is_err());
    }
}
