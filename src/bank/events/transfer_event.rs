use crate::ids::AccountId;
use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Money,
}
