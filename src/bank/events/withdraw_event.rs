use crate::ids::AccountId;
use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawEvent {
    pub account_id: AccountId,
    pub amount: Money,
}
