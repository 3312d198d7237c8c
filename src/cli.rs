//! Command-line arguments for the terminal binary.

use anyhow::{anyhow, Result};
use log::LevelFilter;

use crate::core::GameConfig;
use crate::logging::parse_level;
use crate::types::GRAVITY_MS;

pub const USAGE: &str = "\
usage: blocktris [options]

  --width N         board columns (default 10)
  --height N        board rows (default 16)
  --seed N          seed the piece sequence for a reproducible game
  --gravity-ms N    milliseconds between gravity steps (default 500)
  --log PATH        append log records to PATH
  --log-level LEVEL off|error|warn|info|debug|trace (default debug)
  --help            print this message

keys: arrows move, Up/z rotate left, x rotate right, Space/Esc pause or
start a new game, c toggle colors, q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub game: GameConfig,
    pub seed: Option<u64>,
    pub gravity_ms: u32,
    pub log_file: Option<String>,
    pub log_level: LevelFilter,
    pub help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            gravity_ms: GRAVITY_MS,
            log_file: None,
            log_level: LevelFilter::Debug,
            help: false,
        }
    }
}

/// Parse arguments (without the program name).
///
/// Board dimensions are validated here so a bad `--width` is reported
/// before the terminal is taken over.
pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => config.help = true,
            "--width" => {
                i += 1;
                config.game.width = parse_number(flag, args.get(i))?;
            }
            "--height" => {
                i += 1;
                config.game.height = parse_number(flag, args.get(i))?;
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number(flag, args.get(i))?);
            }
            "--gravity-ms" => {
                i += 1;
                let ms: u32 = parse_number(flag, args.get(i))?;
                if ms == 0 {
                    return Err(anyhow!("--gravity-ms must be positive"));
                }
                config.gravity_ms = ms;
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_file = Some(v.clone());
            }
            "--log-level" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-level"))?;
                config.log_level =
                    parse_level(v).ok_or_else(|| anyhow!("invalid --log-level value: {}", v))?;
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    config.game.validate()?;
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let cfg = parse_args(&[]).unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.game, GameConfig::new(10, 16));
        assert_eq!(cfg.gravity_ms, 500);
    }

    #[test]
    fn parses_every_flag() {
        let cfg = parse_args(&args(&[
            "--width",
            "12",
            "--height",
            "20",
            "--seed",
            "42",
            "--gravity-ms",
            "250",
            "--log",
            "game.log",
            "--log-level",
            "trace",
        ]))
        .unwrap();
        assert_eq!(cfg.game, GameConfig::new(12, 20));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.gravity_ms, 250);
        assert_eq!(cfg.log_file.as_deref(), Some("game.log"));
        assert_eq!(cfg.log_level, LevelFilter::Trace);
        assert!(!cfg.help);
    }

    #[test]
    fn help_flag() {
        assert!(parse_args(&args(&["--help"])).unwrap().help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--width"])).is_err());
        assert!(parse_args(&args(&["--width", "wide"])).is_err());
        assert!(parse_args(&args(&["--width", "0"])).is_err());
        assert!(parse_args(&args(&["--height", "257"])).is_err());
        assert!(parse_args(&args(&["--gravity-ms", "0"])).is_err());
        assert!(parse_args(&args(&["--log-level", "loud"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn dimension_error_names_the_dimension() {
        let err = parse_args(&args(&["--height", "-3"])).unwrap_err();
        assert!(err.to_string().contains("height"));
    }
}
