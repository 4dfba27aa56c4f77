use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::services::LogStore;
use crate::types::LogRecord;

/// Process-local `LogStore`. Records with equal timestamps keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    logs: RefCell<HashMap<String, Vec<LogRecord>>>,
}

impl MemoryStore {
    pub fn len(&self, uid: &str) -> usize {
        self.logs.borrow().get(uid).map(|logs| logs.len()).unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl LogStore for MemoryStore {
    async fn add_log(&self, uid: &str, record: &LogRecord) -> Result<()> {
        self.logs.borrow_mut()
            .entry(uid.to_string())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn logs_newest_first(&self, uid: &str) -> Result<Vec<LogRecord>> {
        let mut logs = self.logs.borrow().get(uid).cloned().unwrap_or_default();
        logs.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;

    use crate::testing::record;

    use super::*;

    #[test]
    fn users_are_isolated() {
        let store = MemoryStore::default();
        let at = Utc.timestamp_opt(10, 0).unwrap();
        block_on(store.add_log("a", &record("from a", at))).unwrap();
        block_on(store.add_log("b", &record("from b", at))).unwrap();

        let logs = block_on(store.logs_newest_first("a")).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].log_text, "from a");
        assert_eq!(store.len("b"), 1);
        assert_eq!(store.len("c"), 0);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let store = MemoryStore::default();
        block_on(store.add_log("a", &record("t3", Utc.timestamp_opt(3, 0).unwrap()))).unwrap();
        block_on(store.add_log("a", &record("t1", Utc.timestamp_opt(1, 0).unwrap()))).unwrap();
        block_on(store.add_log("a", &record("t2", Utc.timestamp_opt(2, 0).unwrap()))).unwrap();

        let logs = block_on(store.logs_newest_first("a")).unwrap();
        let texts = logs.iter().map(|r| r.log_text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["t3", "t2", "t1"]);
    }
}
