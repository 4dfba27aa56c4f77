use std::rc::Rc;

use shared::app::LogApp;
use shared::config::AppConfig;
use shared::error::Result;

use crate::elements::app_root::app_root;
use crate::firebase::{FirebaseAuth, FirestoreLogs};
use crate::geolocation::BrowserGeolocator;
use crate::state::{AppState, DomPage};
use crate::utils::{format_locale_time, set_title};

mod elements;
mod utils;
mod constants;
mod state;
mod firebase;
mod geolocation;
pub mod loader;

const APP_PARAMS: &str = include_str!("../app.json");

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    set_title("Geo Log");

    match init_state() {
        Ok(state) => {
            let app = state.app.clone();
            dominator::append_dom(&dominator::body(), app_root(state));
            app.start();
        }
        Err(err) => {
            log::error!("init: {}", err);
        }
    }
}

fn init_state() -> Result<Rc<AppState>> {
    let config = AppConfig::from_json(APP_PARAMS)?;
    if let Some(options) = &config.firebase {
        if let Err(err) = firebase::initialize(options) {
            log::warn!("firebase.initializeApp: {}", err);
        }
    }

    let page = Rc::new(DomPage::new());
    let app = LogApp::new(
        Rc::new(FirebaseAuth::new()),
        Rc::new(FirestoreLogs::new()),
        Rc::new(BrowserGeolocator::new(config.geolocation.clone())),
        page.clone(),
        config.profile.clone(),
    ).with_time_format(format_locale_time);

    Ok(AppState::new(app, page))
}
