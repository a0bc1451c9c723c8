//! Command-line argument definitions for the status reader
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{EndMarkerPolicy, ParserConfig};
use crate::constants::DEFAULT_DELIMITER;

/// CLI arguments for the OpenVPN status reader
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ovpn-status",
    version,
    about = "Read an OpenVPN status log and list connected clients and routes",
    long_about = "Parses the status file written by an OpenVPN server (--status, status-version 2) \
                  into connected client sessions and routing table entries. Any malformed \
                  CLIENT_LIST or ROUTING_TABLE line makes the whole parse fail."
)]
pub struct Args {
    /// Path to the status log, e.g. /run/openvpn/server.status
    #[arg(value_name = "FILE")]
    pub status_file: PathBuf,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Field delimiter used in the status log
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "STR",
        default_value = DEFAULT_DELIMITER,
        help = "Field delimiter used in the status log"
    )]
    pub delimiter: String,

    /// Stop reading at the first END line
    ///
    /// By default END lines are counted and scanning continues to the end
    /// of the file.
    #[arg(long = "stop-at-end", help = "Stop reading at the first END line")]
    pub stop_at_end: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output formats for parse results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// CSV format, clients then routes
    Csv,
}

impl Args {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the parser configuration from the command line
    pub fn parser_config(&self) -> ParserConfig {
        let end_marker = if self.stop_at_end {
            EndMarkerPolicy::Stop
        } else {
            EndMarkerPolicy::Continue
        };

        ParserConfig::default()
            .with_delimiter(self.delimiter.clone())
            .with_end_marker(end_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ovpn-status", "server.status"]).unwrap();

        assert_eq!(args.status_file, PathBuf::from("server.status"));
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(args.parser_config(), ParserConfig::default());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::try_parse_from(["ovpn-status", "-vv", "s.log"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["ovpn-status", "-q", "s.log"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["ovpn-status", "-q", "-v", "s.log"]).is_err());
    }

    #[test]
    fn test_parser_config_from_flags() {
        let args = Args::try_parse_from([
            "ovpn-status",
            "--stop-at-end",
            "--delimiter",
            "\t",
            "--output-format",
            "csv",
            "s.log",
        ])
        .unwrap();

        let config = args.parser_config();
        assert_eq!(config.delimiter, "\t");
        assert_eq!(config.end_marker, EndMarkerPolicy::Stop);
        assert_eq!(args.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_status_file_required() {
        assert!(Args::try_parse_from(["ovpn-status"]).is_err());
    }
}
