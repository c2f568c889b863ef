//! Runtime configuration.
//!
//! Constants, input filter options derived from the command line, and logging
//! setup.

use crate::args::Args;
use crate::models::Family;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log4rs configuration file, looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
/// Environment variable overriding [`LOG_CONFIG_FILE`]; may be set in `.env`.
pub const LOG_CONFIG_ENV: &str = "PREFIX_AGGREGATE_LOG_CONFIG";
/// Pattern used when no log config file is found.
const DEFAULT_LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Which prefixes read from input enter the set.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Only accept this family.
    pub family: Option<Family>,
    /// Discard prefixes longer than this.
    pub max_length: Option<u8>,
    /// Mask host bits instead of rejecting the token.
    pub truncate: bool,
}

impl FilterConfig {
    pub fn from_args(args: &Args) -> Self {
        let family = if args.ipv4_only {
            Some(Family::V4)
        } else if args.ipv6_only {
            Some(Family::V6)
        } else {
            None
        };
        FilterConfig {
            family,
            max_length: args.max_length,
            truncate: args.truncate,
        }
    }
}

/// Initialize log4rs.
///
/// Loads `.env`, then reads the log config file named by [`LOG_CONFIG_ENV`]
/// (or [`LOG_CONFIG_FILE`]). Without a config file, warnings and errors go to
/// stderr so stdout only carries results.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let path = std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| LOG_CONFIG_FILE.to_string());

    if Path::new(&path).exists() {
        log4rs::init_file(&path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
        log::debug!("logging configured from {path}");
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| format!("Error building log4rs config: {e}"))?;
    log4rs::init_config(config).map_err(|e| format!("Error initializing log4rs: {e}"))?;

    Ok(())
}
