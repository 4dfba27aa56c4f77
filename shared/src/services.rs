//! Seams between the app logic and the things it only consumes: the identity
//! provider, the document store, the device position and the page itself.
//!
//! Browser implementations are single-threaded, so none of these require `Send`.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Control, GeoPoint, LogRecord, LogTable, Session};

pub type SessionObserver = Box<dyn Fn(Option<Session>)>;

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Starts the redirect flow. Completion is only visible through the session observer.
    async fn sign_in(&self) -> Result<()>;

    async fn sign_out(&self) -> Result<()>;

    fn current_session(&self) -> Option<Session>;

    fn is_signed_in(&self) -> bool {
        self.current_session().is_some()
    }

    /// Registers the observer. It is called with the initial state and then on every change.
    fn on_session_changed(&self, observer: SessionObserver);
}

/// Per-user append-only log collection (`users/{uid}/logs`).
#[async_trait(?Send)]
pub trait LogStore {
    async fn add_log(&self, uid: &str, record: &LogRecord) -> Result<()>;

    /// All records of `uid`, ordered by `logged_at`, most recent first.
    async fn logs_newest_first(&self, uid: &str) -> Result<Vec<LogRecord>>;
}

#[async_trait(?Send)]
pub trait Geolocator {
    /// Single-shot position request. Denial and unavailability come back as errors.
    async fn current_position(&self) -> Result<GeoPoint>;
}

/// The page elements the app reads and mutates.
pub trait Page {
    fn set_visible(&self, control: Control, visible: bool);
    fn set_user_name(&self, name: &str);
    fn set_user_pic(&self, url: &str);
    fn log_text(&self) -> String;
    fn clear_log_text(&self);
    fn clear_logs(&self);
    fn show_logs(&self, table: &LogTable);
}
