//! Usage: App-level Tauri commands (greeting, settings, lifecycle).

use crate::resident::ResidentState;
use crate::settings::{self, AppSettings};
use tauri::Manager;

#[tauri::command]
pub(crate) fn greet(name: &str) -> String {
    format!("Hello, {}! You've been greeted from Rust!", name)
}

#[tauri::command]
pub(crate) fn settings_get(app: tauri::AppHandle) -> Result<AppSettings, String> {
    settings::read(&app)
}

#[tauri::command]
pub(crate) fn settings_set(
    app: tauri::AppHandle,
    settings: AppSettings,
) -> Result<AppSettings, String> {
    let saved = settings::write(&app, &settings)?;
    app.state::<ResidentState>()
        .set_tray_enabled(saved.tray_enabled);
    Ok(saved)
}

#[tauri::command]
pub(crate) fn app_exit(app: tauri::AppHandle) -> Result<bool, String> {
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(200));
        app.exit(0);
    });
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_formats_the_fixed_message() {
        assert_eq!(
            greet("Tray Desk"),
            "Hello, Tray Desk! You've been greeted from Rust!"
        );
    }
}
