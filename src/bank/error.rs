use crate::ids::AccountId;
use crate::money::{Money, MoneyError};

use thiserror::Error;

/// Failures a ledger operation can report. A failed operation has no side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}, amounts must be greater than zero")]
    InvalidAmount(Money),

    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountId,
        balance: Money,
        requested: Money,
    },

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Account already exists: {0}")]
    AccountAlreadyExists(AccountId),

    #[error("Cannot transfer from account {0} to itself")]
    SelfTransfer(AccountId),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
