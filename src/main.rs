#![allow(warnings)]
//! Todo Item Frontend Entry Point

mod models;
mod config;
mod error;
mod markup;
mod element;
mod host;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);

    // Static <todo-item> tags in index.html are upgraded before the app mounts
    if let Err(e) = host::define(host::page_config()) {
        log::error!("could not define todo item element: {}", e);
    }

    mount_to_body(App);
}
