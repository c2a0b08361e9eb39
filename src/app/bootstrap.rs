//! Usage: Main window bootstrap (root mount + window-wide context menu override).

use crate::settings::AppSettings;
use tauri::{Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

pub const MAIN_WINDOW_LABEL: &str = "main";
const MAIN_WINDOW_TITLE: &str = "Tray Desk";

// Injected before any page script runs, so the override holds for every
// document this webview navigates to. Unconditional: no target filtering,
// no modifier exceptions.
const CONTEXT_MENU_OVERRIDE_SCRIPT: &str = r#"document.addEventListener("contextmenu", function (event) {
  event.preventDefault();
});
"#;

pub(crate) fn context_menu_override_script() -> &'static str {
    CONTEXT_MENU_OVERRIDE_SCRIPT
}

/// Creates the `main` webview window exactly once per process. A second call
/// returns the live handle instead of mounting again.
pub fn create_main_window(
    app: &tauri::AppHandle,
    settings: &AppSettings,
) -> Result<WebviewWindow, String> {
    if let Some(existing) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        return Ok(existing);
    }

    WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::App("index.html".into()))
        .title(MAIN_WINDOW_TITLE)
        .inner_size(
            f64::from(settings.window_width),
            f64::from(settings.window_height),
        )
        .initialization_script(CONTEXT_MENU_OVERRIDE_SCRIPT)
        .build()
        .map_err(|e| format!("failed to create main window: {e}"))
}
