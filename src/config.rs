//! Runtime configuration for the command-line tool.
//!
//! Values come from the environment (optionally seeded from a `.env` file by the caller) and
//! fall back to the constants below.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable naming the log4rs configuration file.
pub const LOG_CONFIG_ENV: &str = "ROUTE_PREFIX_LOG_CONFIG";
/// Environment variable selecting the report format (`text` or `json`).
pub const OUTPUT_ENV: &str = "ROUTE_PREFIX_OUTPUT";
/// log4rs file used when [`LOG_CONFIG_ENV`] is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l}):5} {t} - {m}{n}";

/// Report format of the command-line tool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format {other:?}, expected text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub output: OutputFormat,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_config = lookup(LOG_CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG));
        let output = match lookup(OUTPUT_ENV) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Config { log_config, output })
    }
}

/// Initialise log4rs from `config.log_config`, or log warnings to stderr if it is missing.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {:?}: {e}", config.log_config))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    log::debug!("log config {:?} not found, using stderr", config.log_config);
    Ok(())
}
