//! Runtime settings for the terminal binary.
//!
//! Layered, later sources win: built-in defaults, then an optional JSON file
//! (`--config <path>`), then individual command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{FRAME_MS, TICK_RATE_HZ};

/// Game settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed. A fresh one is drawn from the OS when absent.
    pub seed: Option<u32>,
    /// Logical ticks per second.
    pub tick_hz: u32,
    /// Upper bound on how long one frame waits for input.
    pub frame_ms: u64,
    /// Log destination. Logging stays off without one; the terminal is
    /// owned by the game screen.
    pub log_file: Option<PathBuf>,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_hz: TICK_RATE_HZ,
            frame_ms: FRAME_MS,
            log_file: None,
            log_level: String::from("info"),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("parse config {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_hz == 0 {
            bail!("tick_hz must be greater than zero");
        }
        if self.frame_ms == 0 {
            bail!("frame_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn frame_timeout(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Build settings from command-line arguments (program name excluded).
///
/// `--config` is applied before any other flag regardless of its position, so
/// flags always override the file.
pub fn parse_args(args: &[String]) -> Result<Settings> {
    let mut settings = match config_path(args)? {
        Some(path) => Settings::load(Path::new(path))?,
        None => Settings::default(),
    };

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                i += 1;
            }
            "--seed" => {
                i += 1;
                let v = value(args, i, flag)?;
                settings.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--tick-hz" => {
                i += 1;
                let v = value(args, i, flag)?;
                settings.tick_hz = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --tick-hz value: {}", v))?;
            }
            "--log-file" => {
                i += 1;
                settings.log_file = Some(PathBuf::from(value(args, i, flag)?));
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    settings.validate()?;
    Ok(settings)
}

fn config_path(args: &[String]) -> Result<Option<&str>> {
    match args.iter().position(|a| a == "--config") {
        Some(i) => value(args, i + 1, "--config").map(Some),
        None => Ok(None),
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        let s = parse_args(&[]).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.tick_hz, 15);
        assert_eq!(s.frame_timeout(), Duration::from_millis(16));
    }

    #[test]
    fn flags_override_defaults() {
        let s = parse_args(&args(&["--seed", "42", "--tick-hz", "30", "--log-file", "snake.log"]))
            .unwrap();
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.tick_hz, 30);
        assert_eq!(s.log_file, Some(PathBuf::from("snake.log")));
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(parse_args(&args(&["--seed", "-1"])).is_err());
        assert!(parse_args(&args(&["--tick-hz", "0"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.tick_hz, TICK_RATE_HZ);
        assert_eq!(s.log_level, "info");
    }
}
