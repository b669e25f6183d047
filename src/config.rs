//! Command line and environment configuration.
//!
//! Every flag can also be set from the environment, and `main` loads a
//! `.env` file before parsing.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default bounded wait for an interactive prompt.
pub const DEFAULT_PROMPT_TIMEOUT_SECS: u64 = 60;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "subnet-calc",
    version,
    about = "IPv4 subnet calculator with ISP gateway allocation"
)]
pub struct Config {
    /// Subnet as a.b.c.d/len or a.b.c.d m.m.m.m. Read from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Vec<String>,

    /// Print the report as JSON.
    #[arg(long, env = "SUBNET_CALC_JSON")]
    pub json: bool,

    /// Seconds to wait for an interactive answer.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        env = "SUBNET_CALC_PROMPT_TIMEOUT",
        default_value_t = DEFAULT_PROMPT_TIMEOUT_SECS
    )]
    pub timeout_secs: u64,

    /// log4rs YAML config; console logging at warn level if missing.
    #[arg(long, env = "SUBNET_CALC_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["subnet-calc"]).unwrap();
        assert!(config.input.is_empty());
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_PROMPT_TIMEOUT_SECS));
        assert!(!config.no_color);
    }

    #[test]
    fn test_mask_form_as_two_args() {
        let config =
            Config::try_parse_from(["subnet-calc", "172.16.0.0", "255.255.0.0"]).unwrap();
        assert_eq!(config.input, vec!["172.16.0.0", "255.255.0.0"]);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "subnet-calc",
            "--json",
            "--timeout",
            "5",
            "--log-config",
            "custom.yml",
            "--no-color",
            "10.0.0.0/8",
        ])
        .unwrap();
        assert!(config.json);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_config, PathBuf::from("custom.yml"));
        assert!(config.no_color);
        assert_eq!(config.input, vec!["10.0.0.0/8"]);
    }

    #[test]
    fn test_bad_timeout_rejected() {
        assert!(Config::try_parse_from(["subnet-calc", "--timeout", "soon"]).is_err());
    }
}
