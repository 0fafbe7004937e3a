use crate::ids::AccountId;
use crate::{LedgerError, LedgerResult, Money, Transaction, TransactionKind};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to an account owned by a ledger
pub type AccountHandle = Arc<Account>;

/// Account holds a non-negative balance and the append-only history of transactions that
/// produced it. Balance and history sit behind one lock so they always change together.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    owner: String,
    state: Mutex<AccountState>,
}

/// Balance and history length of an account, read under its lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub owner: String,
    pub balance: Money,
    pub transactions: usize,
}

#[derive(Debug, Default)]
pub(crate) struct AccountState {
    balance: Money,
    history: Vec<Transaction>,
}

impl AccountState {
    /// Balance after withdrawing `amount`, without applying it
    pub(crate) fn checked_withdraw(&self, id: &AccountId, amount: Money) -> LedgerResult<Money> {
        let balance = self.balance.checked_sub(amount)?;

        if balance.is_negative() {
            return Err(LedgerError::InsufficientFunds {
                account: id.clone(),
                balance: self.balance,
                requested: amount,
            });
        }

        Ok(balance)
    }

    /// Balance after depositing `amount`, without applying it
    pub(crate) fn checked_deposit(&self, amount: Money) -> LedgerResult<Money> {
        Ok(self.balance.checked_add(amount)?)
    }

    pub(crate) fn commit(&mut self, balance: Money, transaction: Transaction) {
        self.balance = balance;
        self.history.push(transaction);
    }

    pub(crate) fn snapshot(&self, account: &Account) -> AccountSnapshot {
        AccountSnapshot {
            id: account.id.clone(),
            owner: account.owner.clone(),
            balance: self.balance,
            transactions: self.history.len(),
        }
    }
}

impl Account {
    pub fn new(id: impl Into<AccountId>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            state: Mutex::new(AccountState::default()),
        }
    }

    /// Opens an account with a starting balance. The opening balance is not a transaction.
    pub fn with_balance(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        balance: Money,
    ) -> LedgerResult<Self> {
        if balance.is_negative() {
            return Err(LedgerError::InvalidAmount(balance));
        }

        let account = Self::new(id, owner);
        account.lock().balance = balance;

        Ok(account)
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn deposit(&self, amount: Money) -> LedgerResult {
        let transaction = Transaction::new(amount, TransactionKind::Deposit)?;

        let mut state = self.lock();
        let balance = state.checked_deposit(amount)?;
        state.commit(balance, transaction);

        log::debug!("Deposited {amount} into account {}, balance {balance}", self.id);

        Ok(())
    }

    pub fn withdraw(&self, amount: Money) -> LedgerResult {
        let transaction = Transaction::new(amount, TransactionKind::Withdraw)?;

        let mut state = self.lock();
        let balance = state.checked_withdraw(&self.id, amount)?;
        state.commit(balance, transaction);

        log::debug!("Withdrew {amount} from account {}, balance {balance}", self.id);

        Ok(())
    }

    pub fn balance(&self) -> Money {
        self.lock().balance
    }

    /// Copy of the committed history, oldest first
    pub fn history(&self) -> Vec<Transaction> {
        self.lock().history.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.lock().history.len()
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        self.lock().snapshot(self)
    }

    /// State is validated before any field is written, so a poisoned lock never guards a
    /// half-applied change and can be recovered.
    pub(crate) fn lock(&self) -> MutexGuard<'_, AccountState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
