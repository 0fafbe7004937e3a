mod deposit_event;
mod open_event;
mod transfer_event;
mod withdraw_event;

pub use deposit_event::DepositEvent;
pub use open_event::OpenEvent;
pub use transfer_event::TransferEvent;
pub use withdraw_event::WithdrawEvent;

/// Typed ledger command, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    Open(OpenEvent),
    Deposit(DepositEvent),
    Withdraw(WithdrawEvent),
    Transfer(TransferEvent),
}
