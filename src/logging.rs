use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "INKPOST_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is logged unless `INKPOST_LOG` names a file: the terminal belongs
/// to the UI. The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV).map(PathBuf::from) else {
        return;
    };

    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
    let unique_path = unique_log_path(&log_path, &timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                unique_path.display(),
                e
            );
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{path}.{timestamp}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(base: &std::path::Path, timestamp: &str, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}
