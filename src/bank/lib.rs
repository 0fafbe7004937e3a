mod account;
mod account_report;
mod error;
pub mod events;
pub mod ids;
pub mod input;
mod ledger;
mod money;
mod result;
pub mod services;
mod transaction;

pub use account::{Account, AccountHandle, AccountSnapshot};
pub use account_report::AccountReport;
pub use error::LedgerError;
pub use ledger::Ledger;
pub use money::{Money, MoneyError};
pub use result::{LedgerResult, Result};
pub use transaction::{Transaction, TransactionKind};

pub fn build_ledger_service() -> services::LedgerService {
    services::LedgerService::new(Ledger::new())
}
