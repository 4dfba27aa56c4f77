//! Firebase Auth and Cloud Firestore through the compat SDK globals (`firebase.*`)
//! loaded by `index.html`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use js_sys::{Array, Date, Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use shared::config::FirebaseOptions;
use shared::constants::{COLLECTION_LOGS, COLLECTION_USERS, FIELD_LOCATION, FIELD_LOGGED_AT, FIELD_LOG_TEXT, ORDER_DESC};
use shared::error::{AppError, Result};
use shared::services::{IdentityProvider, LogStore, SessionObserver};
use shared::types::{GeoPoint, LogRecord, Session};

use crate::utils::{get_number, get_object, get_string, js_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = firebase, js_name = initializeApp)]
    fn initialize_app(options: &JsValue) -> std::result::Result<JsValue, JsValue>;

    // auth

    type Auth;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth)]
    fn auth() -> Auth;

    #[wasm_bindgen(method, getter, js_name = currentUser)]
    fn current_user(this: &Auth) -> Option<User>;

    #[wasm_bindgen(method, js_name = signInWithRedirect)]
    fn sign_in_with_redirect(this: &Auth, provider: &GoogleAuthProvider) -> Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &Auth) -> Promise;

    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &Auth, observer: &Function) -> JsValue;

    type User;

    #[wasm_bindgen(method, getter)]
    fn uid(this: &User) -> String;

    #[wasm_bindgen(method, getter, js_name = displayName)]
    fn display_name(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = photoURL)]
    fn photo_url(this: &User) -> Option<String>;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type GoogleAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> GoogleAuthProvider;

    // firestore

    type Firestore;

    #[wasm_bindgen(js_namespace = firebase, js_name = firestore)]
    fn firestore() -> Firestore;

    #[wasm_bindgen(method)]
    fn collection(this: &Firestore, path: &str) -> CollectionReference;

    type CollectionReference;

    #[wasm_bindgen(method)]
    fn doc(this: &CollectionReference, path: &str) -> DocumentReference;

    #[wasm_bindgen(method)]
    fn add(this: &CollectionReference, data: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = orderBy)]
    fn order_by(this: &CollectionReference, field: &str, direction: &str) -> Query;

    type DocumentReference;

    #[wasm_bindgen(method)]
    fn collection(this: &DocumentReference, path: &str) -> CollectionReference;

    type Query;

    #[wasm_bindgen(method)]
    fn get(this: &Query) -> Promise;

    type QuerySnapshot;

    #[wasm_bindgen(method, getter)]
    fn docs(this: &QuerySnapshot) -> Array;

    type QueryDocumentSnapshot;

    #[wasm_bindgen(method)]
    fn data(this: &QueryDocumentSnapshot) -> JsValue;

    #[wasm_bindgen(js_namespace = ["firebase", "firestore"], js_name = GeoPoint)]
    type FirestoreGeoPoint;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "firestore"], js_class = "GeoPoint")]
    fn new(latitude: f64, longitude: f64) -> FirestoreGeoPoint;
}

pub fn initialize(options: &FirebaseOptions) -> Result<()> {
    let options = serde_wasm_bindgen::to_value(options)
        .map_err(|err| AppError::Identity(err.to_string()))?;
    initialize_app(&options)
        .map(|_| ())
        .map_err(|err| AppError::Identity(js_error(err)))
}

fn to_session(user: &User) -> Session {
    Session {
        uid: user.uid(),
        display_name: user.display_name(),
        photo_url: user.photo_url(),
    }
}

pub struct FirebaseAuth {
    auth: Auth,
}

impl FirebaseAuth {
    pub fn new() -> Self {
        Self { auth: auth() }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in(&self) -> Result<()> {
        let provider = GoogleAuthProvider::new();
        JsFuture::from(self.auth.sign_in_with_redirect(&provider)).await
            .map(|_| ())
            .map_err(|err| AppError::Identity(js_error(err)))
    }

    async fn sign_out(&self) -> Result<()> {
        JsFuture::from(self.auth.sign_out()).await
            .map(|_| ())
            .map_err(|err| AppError::Identity(js_error(err)))
    }

    fn current_session(&self) -> Option<Session> {
        self.auth.current_user().map(|user| to_session(&user))
    }

    fn on_session_changed(&self, observer: SessionObserver) {
        let listener_callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            let session = if user.is_null() || user.is_undefined() {
                None
            } else {
                Some(to_session(user.unchecked_ref::<User>()))
            };
            observer(session);
        });
        self.auth.on_auth_state_changed(listener_callback.as_ref().unchecked_ref());
        listener_callback.forget();
    }
}

pub struct FirestoreLogs {
    db: Firestore,
}

impl FirestoreLogs {
    pub fn new() -> Self {
        Self { db: firestore() }
    }

    fn logs(&self, uid: &str) -> CollectionReference {
        self.db.collection(COLLECTION_USERS).doc(uid).collection(COLLECTION_LOGS)
    }
}

fn store_error(err: JsValue) -> AppError {
    AppError::Store(js_error(err))
}

fn to_document(record: &LogRecord) -> Result<Object> {
    let data = Object::new();
    let logged_at = Date::new(&JsValue::from_f64(record.logged_at.timestamp_millis() as f64));
    let location = FirestoreGeoPoint::new(record.location.latitude, record.location.longitude);
    Reflect::set(&data, &JsValue::from(FIELD_LOG_TEXT), &JsValue::from(record.log_text.as_str())).map_err(store_error)?;
    Reflect::set(&data, &JsValue::from(FIELD_LOGGED_AT), &logged_at).map_err(store_error)?;
    Reflect::set(&data, &JsValue::from(FIELD_LOCATION), &location).map_err(store_error)?;
    Ok(data)
}

/// Reads `{logText, logged_at: Timestamp, location: GeoPoint}`. Timestamps keep whole seconds.
fn from_document(data: &JsValue) -> Result<LogRecord> {
    let seconds = get_object(data, FIELD_LOGGED_AT)
        .and_then(|logged_at| get_number(&logged_at, "seconds"))
        .ok_or_else(|| AppError::Store(format!("{FIELD_LOGGED_AT} missing")))?;
    let logged_at = DateTime::<Utc>::from_timestamp(seconds as i64, 0)
        .ok_or_else(|| AppError::Store(format!("{FIELD_LOGGED_AT} out of range: {seconds}")))?;

    let location = get_object(data, FIELD_LOCATION)
        .and_then(|location| Some(GeoPoint::new(get_number(&location, "latitude")?, get_number(&location, "longitude")?)))
        .ok_or_else(|| AppError::Store(format!("{FIELD_LOCATION} missing")))?;

    Ok(LogRecord {
        log_text: get_string(data, FIELD_LOG_TEXT).unwrap_or_default(),
        logged_at,
        location,
    })
}

#[async_trait(?Send)]
impl LogStore for FirestoreLogs {
    async fn add_log(&self, uid: &str, record: &LogRecord) -> Result<()> {
        let data = to_document(record)?;
        JsFuture::from(self.logs(uid).add(&data)).await.map_err(store_error)?;
        Ok(())
    }

    async fn logs_newest_first(&self, uid: &str) -> Result<Vec<LogRecord>> {
        let query = self.logs(uid).order_by(FIELD_LOGGED_AT, ORDER_DESC);
        let snapshot: QuerySnapshot = JsFuture::from(query.get()).await.map_err(store_error)?.unchecked_into();
        snapshot.docs().iter()
            .map(|doc| from_document(&doc.unchecked_into::<QueryDocumentSnapshot>().data()))
            .collect::<Result<Vec<_>>>()
    }
}
