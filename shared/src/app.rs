//! Application context: the seams plus the handlers bound to page events.
//!
//! `LogApp` is built once at start-up and cloned into every event handler, so the
//! handlers share no hidden globals and tests can swap any seam for a stand-in.
//! Failures follow the app's policy: they are logged and never shown to the user.

use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::config::ProfileSettings;
use crate::error::{AppError, Result};
use crate::reader::load_table;
use crate::services::{Geolocator, IdentityProvider, LogStore, Page};
use crate::types::{LogRecord, Session};
use crate::utils::format_log_time;
use crate::view::bind_session;
use crate::writer::write_log;

#[derive(Clone)]
pub struct LogApp {
    identity: Rc<dyn IdentityProvider>,
    store: Rc<dyn LogStore>,
    geolocator: Rc<dyn Geolocator>,
    page: Rc<dyn Page>,
    profile: Rc<ProfileSettings>,
    format_time: fn(&DateTime<Utc>) -> String,
    now: fn() -> DateTime<Utc>,
}

impl LogApp {
    pub fn new(
        identity: Rc<dyn IdentityProvider>,
        store: Rc<dyn LogStore>,
        geolocator: Rc<dyn Geolocator>,
        page: Rc<dyn Page>,
        profile: ProfileSettings,
    ) -> Self {
        Self {
            identity,
            store,
            geolocator,
            page,
            profile: Rc::new(profile),
            format_time: format_log_time,
            now: Utc::now,
        }
    }

    /// Replaces the default en-US `format_log_time` used for the table's "Logged at" column.
    pub fn with_time_format(mut self, format_time: fn(&DateTime<Utc>) -> String) -> Self {
        self.format_time = format_time;
        self
    }

    pub fn with_clock(mut self, now: fn() -> DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Subscribes the view binder to session changes. Call once.
    pub fn start(&self) {
        let app = self.clone();
        self.identity.on_session_changed(Box::new(move |session: Option<Session>| app.on_session_changed(session)));
    }

    pub fn on_session_changed(&self, session: Option<Session>) {
        log::info!("session: {}", session.as_ref().map(|s| s.uid.as_str()).unwrap_or("-"));
        bind_session(self.page.as_ref(), session.as_ref(), &self.profile);
    }

    pub async fn sign_in(&self) {
        if let Err(err) = self.identity.sign_in().await {
            log::error!("sign_in: {}", err);
        }
    }

    pub async fn sign_out(&self) {
        if let Err(err) = self.identity.sign_out().await {
            log::error!("sign_out: {}", err);
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_signed_in()
    }

    /// Stores the text currently in the input, tagged with the device position.
    /// The owner is looked up again once the position arrives; signing out in
    /// between writes nothing. The input is cleared only after the store
    /// accepted the record.
    pub async fn add_log(&self) -> Result<LogRecord> {
        log::info!("add_log: trying to add log");
        if !self.identity.is_signed_in() {
            return Err(AppError::NotSignedIn);
        }
        let identity = self.identity.clone();
        let owner = move || identity.current_session().map(|session| session.uid).ok_or(AppError::NotSignedIn);
        let page = self.page.clone();
        let record = write_log(self.geolocator.as_ref(), self.store.as_ref(), owner, move || page.log_text(), self.now).await?;
        self.page.clear_log_text();
        Ok(record)
    }

    /// Rebuilds the log table from a fresh query. Returns `false` without touching
    /// the page when nobody is signed in.
    pub async fn all_logs(&self) -> Result<bool> {
        let session = match self.identity.current_session() {
            Some(session) => session,
            None => return Ok(false),
        };
        self.page.clear_logs();
        let table = load_table(self.store.as_ref(), &session.uid, self.format_time).await?;
        self.page.show_logs(&table);
        Ok(true)
    }
}
