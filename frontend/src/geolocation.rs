use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::PositionOptions;

use shared::config::GeolocationSettings;
use shared::error::{AppError, Result};
use shared::services::Geolocator;
use shared::types::GeoPoint;

use crate::utils::{get_number, get_object, js_error};

type PositionSender = Rc<RefCell<Option<oneshot::Sender<Result<GeoPoint>>>>>;

/// `navigator.geolocation.getCurrentPosition`, one request per call.
pub struct BrowserGeolocator {
    settings: GeolocationSettings,
}

impl BrowserGeolocator {
    pub fn new(settings: GeolocationSettings) -> Self {
        Self { settings }
    }

    fn options(&self) -> PositionOptions {
        let options = PositionOptions::new();
        options.set_enable_high_accuracy(self.settings.high_accuracy);
        if let Some(timeout) = self.settings.timeout_ms {
            options.set_timeout(timeout);
        }
        if let Some(maximum_age) = self.settings.maximum_age_ms {
            options.set_maximum_age(maximum_age);
        }
        options
    }
}

fn read_position(position: &JsValue) -> Result<GeoPoint> {
    let coords = get_object(position, "coords")
        .ok_or_else(|| AppError::Geolocation("position without coords".to_string()))?;
    match (get_number(&coords, "latitude"), get_number(&coords, "longitude")) {
        (Some(latitude), Some(longitude)) => Ok(GeoPoint::new(latitude, longitude)),
        _ => Err(AppError::Geolocation("coords without latitude/longitude".to_string())),
    }
}

fn reply(sender: &PositionSender, result: Result<GeoPoint>) {
    if let Some(tx) = sender.borrow_mut().take() {
        if tx.send(result).is_err() {
            log::debug!("geolocation: nobody is waiting for the position");
        }
    }
}

#[async_trait(?Send)]
impl Geolocator for BrowserGeolocator {
    async fn current_position(&self) -> Result<GeoPoint> {
        let geolocation = web_sys::window()
            .ok_or_else(|| AppError::Geolocation("no window".to_string()))?
            .navigator()
            .geolocation()
            .map_err(|err| AppError::Geolocation(js_error(err)))?;

        let (tx, rx) = oneshot::channel::<Result<GeoPoint>>();
        let sender: PositionSender = Rc::new(RefCell::new(Some(tx)));

        let on_success = sender.clone();
        let success = Closure::<dyn FnMut(JsValue)>::new(move |position: JsValue| {
            reply(&on_success, read_position(&position));
        });
        let on_error = sender.clone();
        let failure = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            reply(&on_error, Err(AppError::Geolocation(js_error(err))));
        });

        geolocation.get_current_position_with_error_callback_and_options(
            success.as_ref().unchecked_ref(),
            Some(failure.as_ref().unchecked_ref()),
            &self.options(),
        ).map_err(|err| AppError::Geolocation(js_error(err)))?;

        // both callbacks must outlive the request
        let result = rx.await
            .map_err(|_| AppError::Geolocation("position request dropped".to_string()))?;
        drop((success, failure));
        result
    }
}
