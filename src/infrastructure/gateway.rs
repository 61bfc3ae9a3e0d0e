use super::in_memory::InMemoryTransactionLog;
use crate::domain::money::Money;
use crate::domain::ports::{ApprovalSourceBox, PaymentGateway, TransactionLogBox};
use crate::domain::transaction::{PaymentOutcome, TransactionRecord};
use crate::error::Result;
use async_trait::async_trait;
use tracing::{info, warn};

/// A payment gateway that moves no money.
///
/// Each attempt asks the approval source for a single decision. Approved payments and
/// all refunds are appended to the transaction log; declined payments leave no trace.
pub struct MockPaymentGateway {
    approval: ApprovalSourceBox,
    log: TransactionLogBox,
}

impl MockPaymentGateway {
    pub fn new(approval: ApprovalSourceBox, log: TransactionLogBox) -> Self {
        Self { approval, log }
    }

    /// A gateway backed by a fresh in-memory log.
    pub fn in_memory(approval: ApprovalSourceBox) -> Self {
        Self::new(approval, Box::new(InMemoryTransactionLog::new()))
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn process_payment(&self, user: &str, amount: Money) -> Result<PaymentOutcome> {
        let outcome = PaymentOutcome::from(self.approval.approve());
        match outcome {
            PaymentOutcome::Approved => {
                self.log
                    .append(TransactionRecord::payment(user, amount))
                    .await?;
                info!(user, %amount, "payment approved");
            }
            PaymentOutcome::Declined => {
                warn!(user, %amount, "payment declined by gateway");
            }
        }
        Ok(outcome)
    }

    async fn refund(&self, user: &str, amount: Money) -> Result<()> {
        self.log.append(TransactionRecord::refund(user, amount)).await?;
        warn!(user, %amount, "refund issued without a matching payment check");
        Ok(())
    }

    async fn transactions(&self) -> Result<Vec<TransactionRecord>> {
        self.log.all().await
    }
}
