mod app;
mod commands;
mod infra;

pub(crate) use app::{bootstrap, resident};
pub(crate) use infra::{app_paths, settings};

use commands::*;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default()
        .manage(resident::ResidentState::default())
        .plugin(tauri_plugin_opener::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        resident::show_main_window(app);
    }));

    let app = builder
        .on_window_event(resident::on_window_event)
        .setup(|app| {
            crate::app::logging::init(app.handle());

            let settings = settings::read_or_default(app.handle());
            app.state::<resident::ResidentState>()
                .set_tray_enabled(settings.tray_enabled);

            #[cfg(desktop)]
            {
                if let Err(err) = resident::setup_tray(app.handle()) {
                    tracing::error!("系统托盘初始化失败: {}", err);
                }
            }

            if let Err(err) = bootstrap::create_main_window(app.handle(), &settings) {
                tracing::error!("主窗口创建失败: {}", err);
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            greet,
            settings_get,
            settings_set,
            app_exit
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { api, .. } = &event {
            tracing::info!("收到退出请求，开始清理...");
            api.prevent_exit();

            let app_handle = app_handle.clone();
            tauri::async_runtime::spawn(async move {
                crate::app::cleanup::cleanup_before_exit(&app_handle);
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                std::process::exit(0);
            });
            return;
        }

        #[cfg(target_os = "macos")]
        if let tauri::RunEvent::Reopen {
            has_visible_windows,
            ..
        } = event
        {
            if !has_visible_windows {
                resident::show_main_window(app_handle);
            }
        }
    });
}
