//! Command implementation for the status reader CLI
//!
//! Sets up logging, parses the status file and renders the report.

use anyhow::Context;
use colored::Colorize;
use std::io::Write;
use tracing::debug;

use crate::app::services::status_parser::{StatusReport, parse_status_file_with_config};
use crate::cli::args::{Args, OutputFormat};
use crate::constants::LOG_TARGET;

/// Parse the status file named on the command line and print the result
pub fn run(args: Args) -> anyhow::Result<StatusReport> {
    setup_logging(&args);

    let config = args.parser_config();
    let report = parse_status_file_with_config(&args.status_file, &config)
        .with_context(|| format!("Failed to parse {}", args.status_file.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => write_human(&mut out, &report)?,
        OutputFormat::Csv => write_csv(&mut out, &report)?,
    }
    out.flush()?;

    Ok(report)
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // A subscriber may already be installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Human-readable listing of clients and routes
pub fn write_human<W: Write>(out: &mut W, report: &StatusReport) -> anyhow::Result<()> {
    writeln!(out, "{} ({})", "Clients".bold(), report.clients.len())?;
    for client in &report.clients {
        writeln!(
            out,
            "  {:<20} {:<22} {:<15} rx {:>12} tx {:>12}  since {}  {}",
            client.name.cyan(),
            client.real_address,
            client.virtual_address,
            client.bytes_received,
            client.bytes_sent,
            client.connected_since.format("%Y-%m-%d %H:%M:%S UTC"),
            client.data_channel_cipher.dimmed()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{} ({})", "Routes".bold(), report.routes.len())?;
    for route in &report.routes {
        writeln!(
            out,
            "  {:<20} {:<20} {:<22} last ref {}",
            route.virtual_address,
            route.common_name.cyan(),
            route.real_address,
            route.last_ref.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
    }

    let stats = &report.stats;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!(
            "{} lines read, {} header, {} ignored, {} END",
            stats.lines_read, stats.header_lines, stats.ignored_lines, stats.end_markers
        )
        .dimmed()
    )?;

    Ok(())
}

const CLIENT_CSV_HEADER: [&str; 11] = [
    "name",
    "real_address",
    "virtual_address",
    "virtual_v6_address",
    "bytes_received",
    "bytes_sent",
    "connected_since",
    "username",
    "client_id",
    "peer_id",
    "data_channel_cipher",
];

const ROUTE_CSV_HEADER: [&str; 4] = ["virtual_address", "common_name", "real_address", "last_ref"];

/// CSV listing: a client section and a routing section, each with headers
/// even when the section has no rows
pub fn write_csv<W: Write>(out: &mut W, report: &StatusReport) -> anyhow::Result<()> {
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut *out);
        writer.write_record(CLIENT_CSV_HEADER)?;
        for client in &report.clients {
            writer
                .serialize(client)
                .context("Failed to write client record")?;
        }
        writer.flush()?;
    }

    writeln!(out)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(&mut *out);
    writer.write_record(ROUTE_CSV_HEADER)?;
    for route in &report.routes {
        writer
            .serialize(route)
            .context("Failed to write routing record")?;
    }
    writer.flush()?;

    Ok(())
}
