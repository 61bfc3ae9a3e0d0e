use super::money::Money;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionKind {
    Payment,
    Refund,
}

/// One entry of the gateway's append-only transaction log.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub user: String,
    pub amount: Money,
}

impl TransactionRecord {
    pub fn payment(user: impl Into<String>, amount: Money) -> Self {
        Self {
            kind: TransactionKind::Payment,
            user: user.into(),
            amount,
        }
    }

    pub fn refund(user: impl Into<String>, amount: Money) -> Self {
        Self {
            kind: TransactionKind::Refund,
            user: user.into(),
            amount,
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransactionKind::Payment => write!(
                f,
                "Payment of ${} processed for user {}",
                self.amount, self.user
            ),
            TransactionKind::Refund => {
                write!(f, "Refund of ${} issued for user {}", self.amount, self.user)
            }
        }
    }
}

/// Result of a single payment attempt.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

impl PaymentOutcome {
    pub fn is_approved(self) -> bool {
        self == PaymentOutcome::Approved
    }
}

impl From<bool> for PaymentOutcome {
    fn from(approved: bool) -> Self {
        if approved {
            PaymentOutcome::Approved
        } else {
            PaymentOutcome::Declined
        }
    }
}
