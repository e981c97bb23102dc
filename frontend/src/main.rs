mod api;
mod app;
mod components;
mod config;
mod controller;
mod dates;
mod error;
mod models;
mod panels;
mod session;
mod view;

use app::{App, AppProps};
use config::Config;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("Budget planner UI loaded. API calls will target: {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
