use crate::AccountSnapshot;

use serde::{Deserialize, Serialize};

/// One row of the balance report printed after processing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub account: String,
    pub owner: String,
    pub balance: String,
    pub transactions: usize,
}

impl From<&AccountSnapshot> for AccountReport {
    fn from(snapshot: &AccountSnapshot) -> Self {
        Self {
            account: snapshot.id.to_string(),
            owner: snapshot.owner.clone(),
            balance: snapshot.balance.to_string(),
            transactions: snapshot.transactions,
        }
    }
}
