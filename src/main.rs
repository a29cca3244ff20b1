//! Todos Frontend Entry Point

mod constants;
mod models;
mod todos;
mod storage;
mod store;
mod routing;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todos frontend");
    mount_to_body(App);
}
