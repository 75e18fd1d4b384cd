//! Todo Frontend Entry Point

mod app;
mod components;
mod context;
mod cookie;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) =
        rolling_logger::init_logger(log::LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY)
    {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}
