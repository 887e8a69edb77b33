//! Coursue Frontend Entry Point

mod app;
mod components;
mod context;
mod data;
mod flows;
mod models;
mod overlay;
mod session;
mod store;
mod theme;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
