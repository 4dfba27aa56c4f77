use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{HEADER_COORDINATES, HEADER_LOG, HEADER_LOGGED_AT};
use crate::utils::format_location;

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Session {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One stored note. Records are append-only: nothing in the app updates or removes them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogRecord {
    #[serde(rename = "logText")]
    pub log_text: String,
    pub logged_at: DateTime<Utc>,
    pub location: GeoPoint,
}

/// Discriminants double as positions in `Control::ALL`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum Control {
    SignIn = 0,
    SignOut = 1,
    UserName = 2,
    UserPic = 3,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::SignIn, Control::SignOut, Control::UserName, Control::UserPic];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRow {
    pub log: String,
    pub logged_at: String,
    pub coordinates: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTable {
    pub rows: Vec<LogRow>,
}

impl LogTable {
    pub fn header() -> [&'static str; 3] {
        [HEADER_LOG, HEADER_LOGGED_AT, HEADER_COORDINATES]
    }

    /// Rows keep the order of `records`.
    pub fn from_records(records: &[LogRecord], format_time: fn(&DateTime<Utc>) -> String) -> Self {
        let rows = records.iter()
            .map(|record| LogRow {
                log: record.log_text.clone(),
                logged_at: format_time(&record.logged_at),
                coordinates: format_location(&record.location),
            })
            .collect::<Vec<_>>();
        Self { rows }
    }
}
