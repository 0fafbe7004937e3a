use crate::ids::AccountId;
use crate::{LedgerError, LedgerResult, Money};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

/// Transaction records one balance change applied to an account.
///
/// The amount is always positive, the direction lives in `kind`. Transfers show up as a
/// `Withdraw` on the source and a `Deposit` on the destination, each naming the other
/// account as its counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    amount: Money,
    kind: TransactionKind,
    timestamp: DateTime<Utc>,
    counterparty: Option<AccountId>,
}

impl Transaction {
    pub fn new(amount: Money, kind: TransactionKind) -> LedgerResult<Self> {
        Self::build(amount, kind, Utc::now(), None)
    }

    /// Builds both legs of a transfer: the withdrawal for `from` and the deposit for `to`
    pub fn new_transfer(
        amount: Money,
        from: &AccountId,
        to: &AccountId,
    ) -> LedgerResult<(Self, Self)> {
        let timestamp = Utc::now();

        let withdrawal = Self::build(
            amount,
            TransactionKind::Withdraw,
            timestamp,
            Some(to.clone()),
        )?;
        let deposit = Self::build(
            amount,
            TransactionKind::Deposit,
            timestamp,
            Some(from.clone()),
        )?;

        Ok((withdrawal, deposit))
    }

    fn build(
        amount: Money,
        kind: TransactionKind,
        timestamp: DateTime<Utc>,
        counterparty: Option<AccountId>,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        Ok(Self {
            amount,
            kind,
            timestamp,
            counterparty,
        })
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn counterparty(&self) -> Option<&AccountId> {
        self.counterparty.as_ref()
    }
}
