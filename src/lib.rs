pub mod constants;
pub mod dispatch;
pub mod error;
pub mod inhibitor;
pub mod models;
pub mod platform;
pub mod reporter;
pub mod session;
#[cfg(test)]
mod test_utils;
#[cfg(feature = "tray")]
mod tray;
pub mod validation;
pub mod watcher;
pub mod worker;

pub use dispatch::SessionHandle;
pub use error::AppError;
pub use platform::NativePlatform;
pub use session::{Config, Presenter};

#[cfg(feature = "tray")]
use crate::tray::{TrayItems, TrayPresenter, TRAY_ID};
#[cfg(feature = "tray")]
use std::sync::Arc;
#[cfg(feature = "tray")]
use tauri::{tray::TrayIconBuilder, Manager, RunEvent};

#[cfg(feature = "tray")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = tauri::Builder::default()
        .setup(|app| {
            let handle = app.handle();

            // Setup tray menu; the presenter keeps it in sync with the session
            let items = TrayItems::new(handle)?;
            let menu = items.menu(handle)?;
            let presenter = TrayPresenter::new(handle.clone(), items);

            let session = SessionHandle::spawn(
                Config::default(),
                Arc::new(NativePlatform::new()),
                Box::new(presenter),
            )?;
            app.manage(session);

            let mut builder = TrayIconBuilder::with_id(TRAY_ID)
                .menu(&menu)
                .show_menu_on_left_click(true)
                .tooltip("WakeLock")
                .on_menu_event(|app, event| tray::handle_menu_event(app, event.id.0.as_str()));
            if let Some(icon) = app.default_window_icon() {
                builder = builder.icon(icon.clone());
            }
            builder.build(app)?;

            Ok(())
        })
        .build(tauri::generate_context!())?;

    app.run(|app, event| {
        // Tray-only app: only Quit ends the process
        if let RunEvent::ExitRequested { code: None, api, .. } = &event {
            api.prevent_exit();
        } else if matches!(event, RunEvent::Exit) {
            if let Some(session) = app.try_state::<SessionHandle>() {
                dispatch::log_send_error(session.shutdown());
            }
        }
    });

    Ok(())
}
