//! Runtime configuration and logging setup.
//!
//! Values come from the environment (a `.env` file is loaded by `main`):
//! - `IPVIZ_LOG_CONFIG` - log4rs YAML file, default `log4rs.yml`
//! - `IPVIZ_DEFAULT_ADDRESS` - address shown when none is given
//! - `IPVIZ_COLOR` - `0`, `false`, `no` or `off` disables colors

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_ADDRESS: &str = "192.168.10.42";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub default_address: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            default_address: DEFAULT_ADDRESS.to_string(),
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();
        Config {
            log_config: get("IPVIZ_LOG_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            default_address: get("IPVIZ_DEFAULT_ADDRESS")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.default_address),
            color: get("IPVIZ_COLOR")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.color),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Initialise log4rs from `path`, or log warnings to stderr if it is missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| format!("Error building log config: {e}"))?;
    log4rs::init_config(config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
    Ok(())
}
