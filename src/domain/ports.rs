use super::money::Money;
use super::transaction::{PaymentOutcome, TransactionRecord};
use crate::error::Result;
use async_trait::async_trait;

/// Append-only storage for payment and refund records.
#[async_trait]
pub trait TransactionLog: Send + Sync {
    async fn append(&self, record: TransactionRecord) -> Result<()>;
    async fn all(&self) -> Result<Vec<TransactionRecord>>;
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Attempts to charge `amount` to `user`. Only approved payments are logged.
    async fn process_payment(&self, user: &str, amount: Money) -> Result<PaymentOutcome>;

    /// Issues a refund to `user`.
    ///
    /// Refunds are trusted as given: nothing checks that a matching payment was ever
    /// processed.
    async fn refund(&self, user: &str, amount: Money) -> Result<()>;

    /// The full transaction log in insertion order.
    async fn transactions(&self) -> Result<Vec<TransactionRecord>>;
}

/// Decides whether a single payment is approved.
pub trait ApprovalSource: Send + Sync {
    fn approve(&self) -> bool;
}

pub type TransactionLogBox = Box<dyn TransactionLog>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type ApprovalSourceBox = Box<dyn ApprovalSource>;
