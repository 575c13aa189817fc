// ============================================================================
// OSINT DASHBOARD - Cliente de la plataforma de investigación (Rust + WASM)
// ============================================================================
// Capas:
// - Services: SOLO comunicación API
// - Stores: estado por petición (loading / data / error) + historial
// - State: sesión y reactividad con Rc<RefCell>
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;

#[cfg(test)]
mod testing;

pub use app::{App, Stores};
pub use config::{AppConfig, CONFIG};
pub use error::{ApiError, ConfigError, TransportError, ValidationError};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_logger::Config;

    use crate::app::App;
    use crate::config::CONFIG;

    // Instancia global de la app
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            let level = if CONFIG.is_production() {
                log::Level::Info
            } else {
                log::Level::Debug
            };
            wasm_logger::init(Config::new(level));
        }
        log::info!("🚀 {} - Rust + WASM", CONFIG.app_name);

        let app = App::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));

        wasm_bindgen_futures::spawn_local(async move {
            app.start().await;
        });
        Ok(())
    }

    fn with_app(action: impl FnOnce(&App)) {
        APP.with(|cell| match cell.borrow().as_ref() {
            Some(app) => action(app),
            None => log::warn!("⚠️ App no está inicializada"),
        });
    }

    /// Navegación con guard, llamable desde JavaScript
    #[wasm_bindgen]
    pub fn navigate(path: &str) {
        with_app(|app| {
            app.navigate(path);
        });
    }

    #[wasm_bindgen]
    pub fn logout() {
        with_app(|app| app.auth().logout());
    }
}
