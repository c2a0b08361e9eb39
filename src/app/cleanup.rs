//! Usage: Best-effort cleanup hooks for app lifecycle events (exit).

use std::sync::atomic::{AtomicBool, Ordering};

static CLEANUP_STARTED: AtomicBool = AtomicBool::new(false);

pub(crate) fn cleanup_before_exit(_app: &tauri::AppHandle) {
    if CLEANUP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    tracing::info!("退出清理：刷新日志缓冲");
    crate::app::logging::flush_file_writer();
}
