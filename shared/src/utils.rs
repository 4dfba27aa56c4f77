use chrono::{DateTime, Local, TimeZone, Utc};

use crate::constants::PROFILE_PIC_HOST;
use crate::types::GeoPoint;

pub fn format_location(location: &GeoPoint) -> String {
    format!("{:.3}, {:.3}", location.latitude, location.longitude)
}

/// Fixed en-US rendering (`5/1/2024, 9:15:00 AM`) in the local time zone; sub-second
/// precision is dropped. Not locale-aware: the browser build swaps in
/// `Date.toLocaleString` through `LogApp::with_time_format`.
pub fn format_log_time(logged_at: &DateTime<Utc>) -> String {
    match Local.timestamp_opt(logged_at.timestamp(), 0).single() {
        Some(local) => local.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => logged_at.to_rfc3339(),
    }
}

pub fn resolve_profile_pic(url: Option<&str>, placeholder: &str, size: u32) -> String {
    match url {
        Some(url) if !url.is_empty() => add_size_to_profile_pic(url, size),
        _ => placeholder.to_string(),
    }
}

fn add_size_to_profile_pic(url: &str, size: u32) -> String {
    if url.contains(PROFILE_PIC_HOST) && !url.contains('?') {
        format!("{url}?sz={size}")
    } else {
        url.to_string()
    }
}
