//! K-Connect Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod demo;
mod nav;
mod session_storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("K-Connect") {
        leptos::logging::error!("Logger already installed: {}", e);
    }
    mount_to_body(App);
}
