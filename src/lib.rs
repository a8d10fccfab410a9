mod app;
mod components;
mod layers_panel;
mod properties_panel;
mod utils;

pub mod config;
pub mod drag_logic;
pub mod editor;
pub mod error;
pub mod persistence;
pub mod scene;
pub mod types;

use app::{App, AppProps};
use config::EditorConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    let (config, config_error) = EditorConfig::from_page();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = config_error {
        e.report("config");
    }
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
