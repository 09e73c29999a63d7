//! PersonalMasker Playground Backend
//!
//! Thin Tauri shell around `mask-client`:
//! - logging: tracing subscriber setup
//! - commands: Tauri command handlers invoked by the UI

use std::sync::Arc;

use mask_client::{ClientConfig, HttpMaskClient, MaskService};
use tauri::Manager;

mod commands;
mod logging;

/// Application state shared across commands
pub struct AppState {
    pub service: Arc<dyn MaskService>,
    pub config: ClientConfig,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init_tracing();

    let config = ClientConfig::from_env();
    let client = HttpMaskClient::new(config.clone()).expect("failed to build masking client");
    tracing::info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout.as_millis() as u64,
        log_body = config.log_body,
        "masking service configured"
    );

    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;
            tracing::info!("playground window ready");
            Ok(())
        })
        .manage(AppState {
            service: Arc::new(client),
            config,
        })
        .invoke_handler(tauri::generate_handler![
            commands::mask_text,
            commands::check_health,
            commands::service_info,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
