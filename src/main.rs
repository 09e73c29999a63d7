#![allow(warnings)]
//! PersonalMasker Playground Frontend Entry Point

mod models;
mod request;
mod compositor;
mod playground;
mod commands;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
