//! DrishtiIO - pose capture daemon
//!
//! Receives fixed-size tracker pose records over UDP, builds the rigid
//! transform for each sample, and appends capture rows to a CSV file.
//! Capture ends at the configured record cap, on a receive timeout after
//! the first record, or on Ctrl-C.

use drishti_io::config::AppConfig;
use drishti_io::core::Mat4;
use drishti_io::error::{Error, Result};
use drishti_io::streaming::{CsvSink, PoseReceiver};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Parsed command line.
///
/// Supports:
/// - `drishti-io <listen_addr> <output_path>` (positional)
/// - `drishti-io --config <path>` (flag-based)
/// - `drishti-io -c <path>` (short flag)
///
/// Positionals override whatever the config file supplies.
struct CliArgs {
    config_path: Option<String>,
    listen_address: Option<String>,
    output_path: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = env::args().collect();

    let mut parsed = CliArgs {
        config_path: None,
        listen_address: None,
        output_path: None,
    };

    let mut positionals = Vec::new();
    let mut i = 1;
    while i < args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            parsed.config_path = Some(args[i + 1].clone());
            i += 2;
            continue;
        }
        if !args[i].starts_with('-') {
            positionals.push(args[i].clone());
        }
        i += 1;
    }

    parsed.listen_address = positionals.first().cloned();
    parsed.output_path = positionals.get(1).cloned();
    parsed
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("DrishtiIO v0.2.0 starting...");

    let cli = parse_args();
    let mut config = match &cli.config_path {
        Some(path) => {
            log::info!("Using config: {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    if let Some(addr) = cli.listen_address {
        config.network.listen_address = addr;
    }
    if let Some(path) = cli.output_path {
        config.capture.output_path = path;
    }

    // Set up shutdown signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let receiver = PoseReceiver::bind(
        &config.network.listen_address,
        Duration::from_secs(config.network.timeout_secs),
        config.capture.max_records,
    )?;
    let mut sink = CsvSink::create(&config.capture.output_path)?;
    log::info!(
        "Writing up to {} records to {}",
        config.capture.max_records,
        config.capture.output_path
    );

    let captured = receiver.run(&running, |seq, record| {
        let transform = Mat4::from_translation_quat(record.position, record.rotation);
        log::trace!("{} @ {}:\n{}", record.id, record.timestamp, transform);
        log::debug!(
            "{} seq {} confidence {} trigger {}",
            record.id,
            seq,
            record.confidence,
            record.trigger_activated
        );
        sink.append(seq, record)
    })?;
    sink.finish()?;

    log::info!("Capture finished: {} records", captured);
    Ok(())
}
