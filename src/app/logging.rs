//! Usage: Process-wide tracing setup (stdout + daily rolling file under the app dotdir).

use crate::app_paths;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_PREFIX: &str = "tray-desk.log";

// Dropping the guard flushes buffered log lines; `cleanup` takes it right
// before the process exits.
static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn init(app: &tauri::AppHandle) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact();

    let mut file_layer = None;
    let mut warn_msg = None;

    match app_paths::app_data_dir(app) {
        Ok(dir) => {
            let log_dir = dir.join("logs");
            if let Err(err) = std::fs::create_dir_all(&log_dir) {
                warn_msg = Some(format!(
                    "file logging disabled ({}): {err}",
                    log_dir.display()
                ));
            } else {
                let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                if let Ok(mut slot) = FILE_GUARD.lock() {
                    *slot = Some(guard);
                }
                file_layer = Some(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .compact()
                        .with_writer(writer),
                );
            }
        }
        Err(err) => {
            warn_msg = Some(format!("file logging disabled: {err}"));
        }
    }

    // Route `log`-based crates through tracing.
    let _ = tracing_log::LogTracer::init();

    let registry = tracing_subscriber::registry().with(filter).with(stdout_layer);
    if let Some(layer) = file_layer {
        registry.with(layer).try_init().ok();
    } else {
        registry.try_init().ok();
    }

    if let Some(message) = warn_msg {
        tracing::warn!("{message}");
    }
}

pub(crate) fn flush_file_writer() {
    if let Ok(mut slot) = FILE_GUARD.lock() {
        slot.take();
    }
}
