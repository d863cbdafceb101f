//! Browser entry point for the Genie console

use genie_ui::App;
use leptos::prelude::*;
use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    // Gate decisions and checkout steps log at debug; keep them out of release consoles
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(max_level).build(),
    );
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Genie console");

    mount_to_body(App);
}
