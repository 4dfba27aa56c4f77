//! Stand-ins for the browser and the hosted services.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::services::{Geolocator, IdentityProvider, LogStore, Page, SessionObserver};
use crate::types::{Control, GeoPoint, LogRecord, LogTable, Session};

pub fn session(uid: &str) -> Session {
    Session {
        uid: uid.to_string(),
        display_name: Some(format!("User {uid}")),
        photo_url: Some(format!("https://lh3.googleusercontent.com/{uid}")),
    }
}

pub fn record(text: &str, logged_at: DateTime<Utc>) -> LogRecord {
    LogRecord {
        log_text: text.to_string(),
        logged_at,
        location: GeoPoint::new(51.5007, -0.1246),
    }
}

pub struct FixedGeolocator(pub GeoPoint);

#[async_trait(?Send)]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<GeoPoint> {
        Ok(self.0)
    }
}

pub struct FailingGeolocator;

#[async_trait(?Send)]
impl Geolocator for FailingGeolocator {
    async fn current_position(&self) -> Result<GeoPoint> {
        Err(AppError::Geolocation("User denied Geolocation".to_string()))
    }
}

/// Rejects every request, like a store that is offline or denies access.
pub struct FailingStore;

#[async_trait(?Send)]
impl LogStore for FailingStore {
    async fn add_log(&self, _uid: &str, _record: &LogRecord) -> Result<()> {
        Err(AppError::Store("permission-denied".to_string()))
    }

    async fn logs_newest_first(&self, _uid: &str) -> Result<Vec<LogRecord>> {
        Err(AppError::Store("unavailable".to_string()))
    }
}

#[derive(Default)]
pub struct ScriptedIdentity {
    pub session: RefCell<Option<Session>>,
    pub observer: RefCell<Option<SessionObserver>>,
    pub subscriptions: Cell<usize>,
    pub sign_in_calls: Cell<usize>,
    pub fail_sign_out: Cell<bool>,
}

impl ScriptedIdentity {
    /// Changes the session the way the provider would, notifying the observer.
    pub fn switch(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session.clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(session);
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for ScriptedIdentity {
    async fn sign_in(&self) -> Result<()> {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out.get() {
            return Err(AppError::Identity("network-request-failed".to_string()));
        }
        self.switch(None);
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn on_session_changed(&self, observer: SessionObserver) {
        self.subscriptions.set(self.subscriptions.get() + 1);
        observer(self.current_session());
        *self.observer.borrow_mut() = Some(observer);
    }
}

#[derive(Default)]
pub struct RecordingPage {
    pub controls: RefCell<BTreeMap<Control, bool>>,
    pub user_name: RefCell<String>,
    pub user_pic: RefCell<String>,
    pub log_text: RefCell<String>,
    pub logs: RefCell<Option<LogTable>>,
    pub mutations: Cell<usize>,
}

impl RecordingPage {
    pub fn visible(&self) -> BTreeSet<Control> {
        self.controls.borrow().iter()
            .filter(|(_, visible)| **visible)
            .map(|(control, _)| *control)
            .collect()
    }

    fn touch(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

impl Page for RecordingPage {
    fn set_visible(&self, control: Control, visible: bool) {
        self.touch();
        self.controls.borrow_mut().insert(control, visible);
    }

    fn set_user_name(&self, name: &str) {
        self.touch();
        *self.user_name.borrow_mut() = name.to_string();
    }

    fn set_user_pic(&self, url: &str) {
        self.touch();
        *self.user_pic.borrow_mut() = url.to_string();
    }

    fn log_text(&self) -> String {
        self.log_text.borrow().clone()
    }

    fn clear_log_text(&self) {
        self.touch();
        self.log_text.borrow_mut().clear();
    }

    fn clear_logs(&self) {
        self.touch();
        *self.logs.borrow_mut() = None;
    }

    fn show_logs(&self, table: &LogTable) {
        self.touch();
        *self.logs.borrow_mut() = Some(table.clone());
    }
}
