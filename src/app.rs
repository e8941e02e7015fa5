use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tauri::{Emitter, Manager, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use crate::core::{
    config::{ConfigManager, Settings},
    greeting,
    model::GreetingReply,
};

static GREETING_COUNTER: AtomicU64 = AtomicU64::new(0);

struct AppState {
    settings: Mutex<Settings>,
    config_manager: ConfigManager,
}

/// Backend half of the logo click handler. The webview prompts for the
/// name and passes the result here; `None` means the prompt was cancelled.
#[tauri::command]
async fn submit_name(
    name: Option<String>,
    state: State<'_, AppState>,
    app: tauri::AppHandle,
) -> Result<GreetingReply, String> {
    let reply = greeting::reply_for(name.as_deref());
    let shown = GREETING_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
    println!("Greeting #{}: valid={} -> {}", shown, reply.valid, reply.message);

    let (native_dialogs, dialog_title) = {
        let settings = state.settings.lock().unwrap();
        (settings.native_dialogs, settings.dialog_title.clone())
    };

    if native_dialogs {
        // Run the modal dialog on a separate thread to avoid freezing the UI
        let handle = app.clone();
        let message = reply.message.clone();
        let kind = if reply.valid {
            MessageDialogKind::Info
        } else {
            MessageDialogKind::Warning
        };
        tauri::async_runtime::spawn_blocking(move || {
            handle
                .dialog()
                .message(message)
                .title(dialog_title)
                .kind(kind)
                .blocking_show();
        })
        .await
        .map_err(|e| e.to_string())?;
    }

    // The webview alerts on this when native dialogs are off
    let _ = app.emit("greeting-shown", reply.clone());

    Ok(reply)
}

#[tauri::command]
fn get_settings(state: State<'_, AppState>) -> Settings {
    state.settings.lock().unwrap().clone()
}

#[tauri::command]
fn save_settings(settings: Settings, state: State<'_, AppState>) -> Result<(), String> {
    let mut current = state.settings.lock().unwrap();
    *current = settings.clone();
    state.config_manager.save(&settings).map_err(|e| e.to_string())
}

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Initialize Config
            let config_dir = app.path().app_config_dir().unwrap_or(PathBuf::from("."));
            let config_manager = ConfigManager::new(config_dir);
            let settings = config_manager.load();
            println!("Settings loaded: native_dialogs={}", settings.native_dialogs);

            app.manage(AppState {
                settings: Mutex::new(settings),
                config_manager,
            });

            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            app.handle().plugin(tauri_plugin_dialog::init())?;
            app.handle()
                .plugin(tauri_plugin_window_state::Builder::default().build())?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            submit_name,
            get_settings,
            save_settings
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
