use anyhow::Context;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. The level is `info` unless `debug` is set, in which
/// case it defaults to `debug` and can be overridden via `RUST_LOG`.
///
/// Output goes to `log_file` when given and to stderr otherwise; stdout is
/// reserved for the JSON-RPC response. If the log file cannot be opened the
/// logger falls back to stderr and reports the failure there.
pub fn init(debug: bool, log_file: Option<&Path>) {
    // Without debug logging `RUST_LOG` is ignored so a variable left in the
    // user's environment cannot make the plugin chatty.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let (appender, open_error) = match log_file.map(file_appender) {
        Some(Ok(appender)) => (Some(appender), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let _ = match appender {
        Some(appender) => builder.with_ansi(false).with_writer(appender).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    if let Some(e) = open_error {
        tracing::warn!("logging to stderr: {e:#}");
    }
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
