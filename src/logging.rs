//! Logger setup.
//!
//! `SYMBOLBAR_LOG` selects the level (`off`, `error`, `warn`, `info`,
//! `debug`, `trace`); the default is `info`. Output goes to stderr through a
//! colored `TermLogger` when a terminal is attached, otherwise through a
//! plain `SimpleLogger` (e.g. when launched from Finder).

use std::env;
use std::io::IsTerminal;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, SimpleLogger, TermLogger, TerminalMode};

use crate::model::ENV_LOG;

/// Parses a level name; unknown values yield `None`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Level from the environment, defaulting to `Info`.
pub fn level_from_env() -> LevelFilter {
    env::var(ENV_LOG)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info)
}

fn config() -> Config {
    ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .add_filter_ignore_str("winit")
        .add_filter_ignore_str("wgpu")
        .add_filter_ignore_str("naga")
        .add_filter_ignore_str("eframe")
        .add_filter_ignore_str("egui_glow")
        .build()
}

/// Installs the global logger. Calling it twice is harmless.
pub fn init() {
    let level = level_from_env();
    let result = if std::io::stderr().is_terminal() {
        TermLogger::init(level, config(), TerminalMode::Stderr, ColorChoice::Auto)
    } else {
        SimpleLogger::init(level, config())
    };
    if result.is_ok() {
        log::debug!("Logging at {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
