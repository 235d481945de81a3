//! Tray front-end: renders views into the tray menu and turns menu clicks
//! into session commands.

use crate::constants::{AUTO_TRIGGER_LABEL, BUTTON_START, RUNTIME_PREFIX, STATUS_STOPPED};
use crate::dispatch::{log_send_error, SessionHandle};
use crate::models::View;
use crate::session::Presenter;
use log::{info, warn};
use tauri::{
    menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem},
    AppHandle, Manager, Wry,
};

pub const TRAY_ID: &str = "wakelock";

const MENU_STATUS: &str = "status";
const MENU_RUNTIME: &str = "runtime";
const MENU_TOGGLE: &str = "toggle";
const MENU_AUTO: &str = "auto";
const MENU_QUIT: &str = "quit";

/// Menu entries that change with the session.
#[derive(Clone)]
pub struct TrayItems {
    status: MenuItem<Wry>,
    runtime: MenuItem<Wry>,
    toggle: MenuItem<Wry>,
    auto: CheckMenuItem<Wry>,
}

impl TrayItems {
    pub fn new(app: &AppHandle) -> tauri::Result<Self> {
        let idle_runtime = format!("{RUNTIME_PREFIX} 0:00:00");
        Ok(Self {
            status: MenuItem::with_id(app, MENU_STATUS, STATUS_STOPPED, false, None::<&str>)?,
            runtime: MenuItem::with_id(app, MENU_RUNTIME, idle_runtime, false, None::<&str>)?,
            toggle: MenuItem::with_id(app, MENU_TOGGLE, BUTTON_START, true, None::<&str>)?,
            auto: CheckMenuItem::with_id(app, MENU_AUTO, AUTO_TRIGGER_LABEL, true, false, None::<&str>)?,
        })
    }

    pub fn menu(&self, app: &AppHandle) -> tauri::Result<Menu<Wry>> {
        let separator = PredefinedMenuItem::separator(app)?;
        let quit = MenuItem::with_id(app, MENU_QUIT, "Quit WakeLock", true, None::<&str>)?;
        Menu::with_items(
            app,
            &[
                &self.status,
                &self.runtime,
                &separator,
                &self.toggle,
                &self.auto,
                &separator,
                &quit,
            ],
        )
    }

    fn apply(&self, app: &AppHandle, view: &View) {
        let results = [
            self.status.set_text(&view.status),
            self.runtime.set_text(&view.elapsed),
            self.toggle.set_text(&view.button),
            self.auto.set_checked(view.auto_trigger),
        ];
        for result in results {
            if let Err(e) = result {
                warn!("Failed to update tray menu: {e}");
            }
        }

        if let Some(tray) = app.tray_by_id(TRAY_ID) {
            if let Err(e) = tray.set_tooltip(Some(format!("WakeLock - {}", view.status))) {
                warn!("Failed to update tray tooltip: {e}");
            }
        }
    }
}

/// Marshals each view onto the UI main thread before touching the menu.
pub struct TrayPresenter {
    app: AppHandle,
    items: TrayItems,
}

impl TrayPresenter {
    pub fn new(app: AppHandle, items: TrayItems) -> Self {
        Self { app, items }
    }
}

impl Presenter for TrayPresenter {
    fn render(&mut self, view: &View) {
        let app = self.app.clone();
        let items = self.items.clone();
        let view = view.clone();

        if let Err(e) = self
            .app
            .run_on_main_thread(move || items.apply(&app, &view))
        {
            warn!("Failed to schedule tray update: {e}");
        }
    }
}

pub fn handle_menu_event(app: &AppHandle, event_id: &str) {
    let Some(handle) = app.try_state::<SessionHandle>() else {
        warn!("Menu event '{event_id}' before session was ready");
        return;
    };

    match event_id {
        MENU_TOGGLE => log_send_error(handle.toggle()),
        MENU_AUTO => log_send_error(handle.toggle_auto()),
        MENU_QUIT => {
            info!("Quit requested");
            log_send_error(handle.shutdown());
            app.exit(0);
        }
        _ => {}
    }
}
