//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Initialise logging from a log4rs YAML file, or a stderr console logger
/// at warn level if the file does not exist.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {config_file:?}: {e}"))?;
        log::debug!("Logging configured from {config_file:?}");
    } else {
        log4rs::init_config(fallback_config()?)
            .map_err(|e| format!("Error initializing fallback logger: {e}"))?;
        log::debug!("No log config at {config_file:?}, using console fallback");
    }
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| format!("Invalid fallback log config: {e}"))?;
    Ok(config)
}
