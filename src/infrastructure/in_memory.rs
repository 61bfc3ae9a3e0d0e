use crate::domain::ports::TransactionLog;
use crate::domain::transaction::TransactionRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A shared in-memory transaction log.
///
/// Uses `Arc<RwLock<Vec<TransactionRecord>>>` so clones see the same history.
/// Records are never removed during a session.
#[derive(Default, Clone)]
pub struct InMemoryTransactionLog {
    records: Arc<RwLock<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionLog {
    /// Creates a new, empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(&self, record: TransactionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<TransactionRecord>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_log_keeps_insertion_order() {
        let log = InMemoryTransactionLog::new();
        log.append(TransactionRecord::payment("Alice", Money::new(dec!(10.0)).unwrap()))
            .await
            .unwrap();
        log.append(TransactionRecord::refund("Bob", Money::new(dec!(5.0)).unwrap()))
            .await
            .unwrap();

        let all = log.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].user, "Alice");
        assert_eq!(all[1].user, "Bob");
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let log = InMemoryTransactionLog::new();
        let other = log.clone();
        other
            .append(TransactionRecord::payment("Alice", Money::new(dec!(1.0)).unwrap()))
            .await
            .unwrap();

        assert_eq!(log.all().await.unwrap().len(), 1);
    }
}
