use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::services::LogStore;
use crate::types::LogTable;

pub async fn load_table(store: &dyn LogStore, uid: &str, format_time: fn(&DateTime<Utc>) -> String) -> Result<LogTable> {
    let records = store.logs_newest_first(uid).await?;
    log::debug!("load_table: {} records for {}", records.len(), uid);
    Ok(LogTable::from_records(&records, format_time))
}
