//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_HISTORY_FILE;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(
    about = "Convert length, weight, temperature and currency values with a persisted history",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// History file (default: conversion_history.txt in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) history_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.history_file.is_none() {
            self.history_file = config.history_file.clone();
        }

        self
    }

    pub(crate) fn history_path(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("unitconv").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_config_fills_unset_values() {
        let config = Config {
            history_file: Some(PathBuf::from("from-config.txt")),
            json: true,
            debug: true,
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert!(cli.json);
        assert!(cli.debug);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.history_path(), PathBuf::from("from-config.txt"));
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config {
            history_file: Some(PathBuf::from("from-config.txt")),
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["--history-file", "cli.txt", "--color", "always"]).with_config(&config);
        assert_eq!(cli.history_path(), PathBuf::from("cli.txt"));
        assert_eq!(cli.color, ColorMode::Always);
        assert!(cli.use_color());
    }

    #[test]
    fn test_default_history_path() {
        let cli = parse(&[]).with_config(&Config::default());
        assert_eq!(cli.history_path(), PathBuf::from("conversion_history.txt"));
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_no_color_wins() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
