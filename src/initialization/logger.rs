//! Logger initialization.
//!
//! Log lines go to stderr; stdout carries only the body or the report.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Crates whose logs are capped at `warn` regardless of the chosen level.
const QUIET_MODULES: &[&str] = &["rustls", "tokio_rustls"];

/// Installs the global logger.
///
/// `RUST_LOG` seeds the filter and `level` then overrides it, so
/// `RUST_LOG=rustls=debug` still works for the TLS stack while `--log-level`
/// controls this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug tls_profiler --profile 10
/// tls_profiler --profile 10 --log-level info --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.filter_module("tls_profiler", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                // Millisecond stamps keep overlapping probes apart.
                let stamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    stamp.dimmed(),
                    record.target().cyan(),
                    colored_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

/// One JSON log object; every string field is escaped by `serde_json`.
fn json_line(ts_millis: i64, level: Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

fn colored_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_escapes_message() {
        let message = "bad \"quote\" \\ and\nnewline";
        let line = json_line(1_700_000_000_000, Level::Warn, "tls_profiler::dispatch", message);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_700_000_000_000i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "tls_profiler::dispatch");
        assert_eq!(value["msg"], message);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_colored_level_keeps_label() {
        assert_eq!(&*colored_level(Level::Error), "ERROR");
        assert_eq!(&*colored_level(Level::Trace), "TRACE");
    }

    #[test]
    fn test_second_init_reports_logger_error() {
        // Only one logger per process; whichever call comes second must fail.
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Json);
        let second = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
