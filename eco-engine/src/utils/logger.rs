//! Logging Infrastructure
//!
//! Structured logging to stderr, or to daily rolling files when a log
//! directory is configured. Stdout is left to command output.

use std::path::Path;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_PREFIX: &str = "eco-engine";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// Safe to call more than once: when a global subscriber is already
/// installed the new one is discarded and a debug event is emitted
/// through the existing one.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let (writer, ansi) = match log_dir.map(Path::new) {
        Some(dir) if dir.is_dir() => (
            BoxMakeWriter::new(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)),
            false,
        ),
        Some(dir) => {
            eprintln!(
                "log directory {} does not exist, logging to stderr",
                dir.display()
            );
            (BoxMakeWriter::new(std::io::stderr), true)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if installed.is_err() {
        tracing::debug!("Global subscriber already set, keeping the existing logger");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_logger();
        init_logger_with_file(Some("debug"), true, Some("/nonexistent/eco-logs"));
        assert!(tracing::dispatcher::has_been_set());
    }
}
