//! Logging Module
//!
//! Sets up `tracing` output for the name generator:
//! - JSON file log with daily rotation (tracing-appender)
//! - Optional pretty stdout log
//! - `log` crate macros forwarded to `tracing`
//! - Gzip compression of rotated log files

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "ttttrps-namegen.log";

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize the logging system.
///
/// This sets up:
/// 1. A file logger (JSON formatted) in `log_dir`.
/// 2. A console logger (pretty formatted) when `config.stdout` is set,
///    on stderr instead of stdout when `config.stderr` is set.
/// 3. Redirects standard `log` crate events to `tracing`.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application to ensure buffered logs are flushed on shutdown.
pub fn init(config: &LoggingConfig, log_dir: &Path) -> WorkerGuard {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File Layer: JSON format for easy parsing/ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter(&config.level));

    let stdout_layer = config.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(console_writer(config))
            .pretty()
            .with_filter(env_filter(&config.level))
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
    {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }

    // try_init already installs the bridge when tracing-log is enabled
    if let Err(e) = tracing_log::LogTracer::init() {
        log::debug!("LogTracer not installed: {}", e);
    }

    let log_dir_clone = log_dir.to_path_buf();
    std::thread::spawn(move || {
        compress_old_logs(log_dir_clone);
    });

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_PREFIX)
    );

    guard
}

fn console_writer(config: &LoggingConfig) -> BoxMakeWriter {
    if config.stderr {
        BoxMakeWriter::new(io::stderr)
    } else {
        BoxMakeWriter::new(io::stdout)
    }
}

/// `RUST_LOG` if set, otherwise the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

// ============================================================================
// Log Compression
// ============================================================================

/// Gzip every rotated log in `log_dir`. Runs on a background thread.
fn compress_old_logs(log_dir: PathBuf) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(&log_dir) else {
        return;
    };

    let rotated = entries.flatten().map(|entry| entry.path()).filter(|path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| should_compress(name, &today_suffix))
    });

    for path in rotated {
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

/// Rotated logs look like `prefix.YYYY-MM-DD`; today's file is still open.
fn should_compress(file_name: &str, today_suffix: &str) -> bool {
    file_name.starts_with(&format!("{}.", LOG_FILE_PREFIX))
        && !file_name.ends_with(today_suffix)
        && !file_name.ends_with(".gz")
}

/// Replace `path` with `path.gz`. An existing archive is left untouched.
fn compress_file(path: &Path) -> io::Result<()> {
    let archive = archive_path(path)?;
    if archive.exists() {
        return Ok(());
    }

    let mut source = io::BufReader::new(fs::File::open(path)?);
    let sink = io::BufWriter::new(fs::File::create(&archive)?);
    let mut encoder = GzEncoder::new(sink, Compression::default());

    io::copy(&mut source, &mut encoder)?;
    encoder.finish()?.flush()?;

    fs::remove_file(path)
}

fn archive_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", path.display()),
        )
    })?;

    let mut archive_name = name.to_os_string();
    archive_name.push(".gz");
    Ok(path.with_file_name(archive_name))
}

// ============================================================================
// Tests
// ============================================================================
