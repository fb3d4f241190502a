//! Garden Plan Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod editor;
mod error;
mod icons;
mod layout;
mod logging;
mod models;
mod presentation;
mod session;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    mount_to_body(App);
}
