use log::{info, Level};

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    info!("Starting CAPE frontend (wasm)");

    // Resolve the API origin early; requests also wait on it if they win the race.
    leptos::spawn_local(async move {
        config::init().await;
        info!("Runtime config initialized");
    });

    router::mount_app();
}
