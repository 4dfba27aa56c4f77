use chrono::{DateTime, Utc};
use js_sys::{Date, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

/// Browser-locale rendering, like `Date.prototype.toLocaleString`. Whole seconds only.
pub fn format_locale_time(logged_at: &DateTime<Utc>) -> String {
    let date = Date::new(&JsValue::from_f64((logged_at.timestamp() * 1000) as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

pub fn get_number(source: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(source, &JsValue::from(key)).ok().and_then(|value| value.as_f64())
}

pub fn get_string(source: &JsValue, key: &str) -> Option<String> {
    Reflect::get(source, &JsValue::from(key)).ok().and_then(|value| value.as_string())
}

pub fn get_object(source: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(source, &JsValue::from(key)).ok().filter(|value| value.is_object())
}

/// Best-effort text for a thrown JS value: the `message` of an `Error`, or its debug form.
pub fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| get_string(&err, "message"))
        .unwrap_or_else(|| format!("{:?}", err))
}
