use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::services::{Geolocator, LogStore};
use crate::types::LogRecord;

/// Captures the device position, then stores one record.
/// The owner's uid, the note text and the timestamp are all taken once the
/// position is known, so a sign-out during the request writes nothing.
/// A failed position request means nothing is written.
pub async fn write_log<O, T>(
    geolocator: &dyn Geolocator,
    store: &dyn LogStore,
    owner: O,
    text: T,
    now: fn() -> DateTime<Utc>,
) -> Result<LogRecord>
    where
        O: FnOnce() -> Result<String>,
        T: FnOnce() -> String
{
    let location = geolocator.current_position().await?;
    let uid = owner()?;
    let record = LogRecord {
        log_text: text(),
        logged_at: now(),
        location,
    };
    log::info!("write_log: {:?}", record);
    store.add_log(&uid, &record).await?;
    log::info!("write_log: logged");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use futures::executor::block_on;

    use crate::error::AppError;
    use crate::memory::MemoryStore;
    use crate::testing::{FailingGeolocator, FailingStore, FixedGeolocator};
    use crate::types::GeoPoint;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn written_record_reads_back() {
        let store = MemoryStore::default();
        let geolocator = FixedGeolocator(GeoPoint::new(37.4219999, -122.0840575));

        block_on(write_log(&geolocator, &store, || Ok("u1".to_string()), || "hello".to_string(), fixed_now)).unwrap();
        let logs = block_on(store.logs_newest_first("u1")).unwrap();

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].log_text, "hello");
        assert_eq!(logs[0].logged_at, fixed_now());
        assert_eq!(logs[0].location, GeoPoint::new(37.4219999, -122.0840575));
    }

    #[test]
    fn position_failure_skips_the_write() {
        let store = MemoryStore::default();
        let result = block_on(write_log(&FailingGeolocator, &store, || Ok("u1".to_string()), || "lost".to_string(), Utc::now));

        assert!(matches!(result, Err(AppError::Geolocation(_))));
        assert!(block_on(store.logs_newest_first("u1")).unwrap().is_empty());
    }

    #[test]
    fn missing_owner_skips_the_write() {
        let store = MemoryStore::default();
        let geolocator = FixedGeolocator(GeoPoint::new(1.0, 1.0));
        let result = block_on(write_log(&geolocator, &store, || Err(AppError::NotSignedIn), || "late".to_string(), Utc::now));

        assert!(matches!(result, Err(AppError::NotSignedIn)));
        assert_eq!(store.len("u1"), 0);
    }

    #[test]
    fn store_failure_is_returned() {
        let geolocator = FixedGeolocator(GeoPoint::new(1.0, 1.0));
        let result = block_on(write_log(&geolocator, &FailingStore, || Ok("u1".to_string()), || "x".to_string(), Utc::now));

        assert!(matches!(result, Err(AppError::Store(_))));
    }
}
