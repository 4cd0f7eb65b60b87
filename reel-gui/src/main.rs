#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default, clippy::type_complexity)]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod widget;

use std::sync::Arc;

use druid::AppLauncher;
use env_logger::{Builder, Env};
use reel_core::{catalog::CatalogHandle, tmdb::TmdbClient};

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
};

const ENV_LOG: &str = "REEL_LOG";
const ENV_LOG_STYLE: &str = "REEL_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let config = Config::load().unwrap_or_default();
    let catalog_config = config.catalog();
    if !catalog_config.has_api_key() {
        log::warn!("no catalog API key configured, every section will stay empty");
    }

    let catalog: CatalogHandle = Arc::new(TmdbClient::new(catalog_config));
    let state = AppState::default_with_config(config);

    let window = ui::main_window(catalog.clone());
    let delegate = Delegate::with_main(window.id, catalog);
    let launched = AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(delegate)
        .launch(state);
    if let Err(err) = launched {
        log::error!("failed to launch: {err}");
    }
}
