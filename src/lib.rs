use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

mod macros;

/// Initialize logging and panic reporting; runs once on module load.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(time_provider);

    // Bridge logger: browser console + on-page debug console.
    domain::logging::init_logger(Box::new(app::LeptosLogger::new()));

    get_logger()
        .info(LogComponent::Presentation("Initialize"), "🚀 Complexity visualization initialized");
}

/// Mount the Leptos application onto `<body>`; called by the host page.
#[wasm_bindgen]
pub fn mount_app() {
    crate::log_info!(LogComponent::Presentation("Mount"), "🖥️ Mounting Leptos application");
    leptos::mount_to_body(app::App);
}
