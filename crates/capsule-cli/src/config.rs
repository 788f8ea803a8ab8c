//! # Configuration
//!
//! Command-line flags and tracing initialization. Log verbosity comes from
//! `RUST_LOG`; events go to stderr so they stay out of the console dialogue.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Capsule hotel front desk.
///
/// Checks guests in and out of a fixed row of capsules. All bookings live
/// in memory and are lost on exit.
#[derive(Parser, Debug)]
#[command(name = "capsule-hotel", version, about)]
pub struct Cli {
    /// Number of capsules. Prompted for interactively when omitted.
    #[arg(
        long,
        value_parser = clap::value_parser!(i64).range(1..=capsule_core::MAX_CAPACITY as i64)
    )]
    pub capacity: Option<i64>,

    /// Layout of log events written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Tracing output layout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["capsule-hotel"]).unwrap();
        assert_eq!(cli.capacity, None);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_capacity_and_format() {
        let cli =
            Cli::try_parse_from(["capsule-hotel", "--capacity", "20", "--log-format", "json"])
                .unwrap();
        assert_eq!(cli.capacity, Some(20));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_out_of_range_capacity() {
        assert!(Cli::try_parse_from(["capsule-hotel", "--capacity", "0"]).is_err());
        assert!(Cli::try_parse_from(["capsule-hotel", "--capacity", "-3"]).is_err());
        assert!(Cli::try_parse_from(["capsule-hotel", "--capacity", "many"]).is_err());
        assert!(Cli::try_parse_from(["capsule-hotel", "--capacity", "1000001"]).is_err());
    }
}
