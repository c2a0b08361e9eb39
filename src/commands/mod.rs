//! Usage: Tauri command handlers exposed to the webview.

mod app;

pub(crate) use app::*;
