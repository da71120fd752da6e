// SPDX-License-Identifier: MIT
//
// Run-wide settings resolved from global flags and the environment.

use std::ffi::OsStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use pf_engine::{Palette, from_share_code};

use crate::cli::Cli;

/// Environment variable holding an `env_logger` filter.
pub const LOG_ENV: &str = "PFORGE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Emit ANSI true-color escapes.
    pub color: bool,
    /// The palette a session starts from.
    pub palette: Palette,
    /// Explicit level from `-v`, overriding the environment filter.
    pub log_level: Option<LevelFilter>,
}

impl Config {
    /// # Errors
    ///
    /// Fails when `--from` is not a valid share code.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let palette = match &cli.from {
            Some(code) => from_share_code(code).with_context(|| format!("--from {code:?}"))?,
            None => Palette::DEFAULT,
        };
        Ok(Self {
            color: color_enabled(cli.no_color, std::env::var_os("NO_COLOR").as_deref()),
            palette,
            log_level: verbosity(cli.verbose),
        })
    }
}

/// Colors are on unless `--no-color` is given or `NO_COLOR` is set to a
/// non-empty value.
pub fn color_enabled(no_color_flag: bool, no_color_env: Option<&OsStr>) -> bool {
    !no_color_flag && no_color_env.is_none_or(OsStr::is_empty)
}

pub const fn verbosity(count: u8) -> Option<LevelFilter> {
    match count {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install the global logger: `PFORGE_LOG` filter (default `warn`), unless
/// a `-v` level overrides it.
pub fn init_logging(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_color_rules() {
        assert!(color_enabled(false, None));
        assert!(color_enabled(false, Some(OsStr::new(""))));
        assert!(!color_enabled(false, Some(OsStr::new("1"))));
        assert!(!color_enabled(true, None));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity(0), None);
        assert_eq!(verbosity(1), Some(LevelFilter::Info));
        assert_eq!(verbosity(2), Some(LevelFilter::Debug));
        assert_eq!(verbosity(9), Some(LevelFilter::Trace));
    }

    #[test]
    fn from_share_code_sets_palette() {
        let cli = Cli::parse_from(["pforge", "report", "--from", "000000-111111-222222-333333-444444"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.palette.to_hex()[4], "#444444");
    }

    #[test]
    fn bad_share_code_is_an_error() {
        let cli = Cli::parse_from(["pforge", "report", "--from", "000000-111111"]);
        let err = Config::from_cli(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("share code must hold 5 colors"));
    }

    #[test]
    fn default_palette() {
        let cli = Cli::parse_from(["pforge", "trending"]);
        assert_eq!(Config::from_cli(&cli).unwrap().palette, Palette::DEFAULT);
    }
}
