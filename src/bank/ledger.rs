use crate::account::{AccountHandle, AccountState};
use crate::ids::AccountId;
use crate::{Account, AccountSnapshot, LedgerError, LedgerResult, Money, Transaction};

use std::collections::HashMap;
use std::sync::{Arc, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Registry of accounts, and the only place transfers between them happen.
///
/// Accounts are handed out as shared handles, so a deposit made through a handle from
/// `get_account` is what the ledger sees afterwards. Accounts are never removed.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, AccountHandle>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_account(
        &self,
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        initial_balance: Money,
    ) -> LedgerResult<AccountHandle> {
        let account = Account::with_balance(id, owner, initial_balance)?;

        self.register(account)
    }

    /// Registers an account under its own id. Ids are never overwritten.
    pub fn register(&self, account: Account) -> LedgerResult<AccountHandle> {
        let mut accounts = self.write();

        if accounts.contains_key(account.id()) {
            return Err(LedgerError::AccountAlreadyExists(account.id().clone()));
        }

        let handle = Arc::new(account);
        accounts.insert(handle.id().clone(), Arc::clone(&handle));

        log::debug!(
            "Registered account {} for {} with balance {}",
            handle.id(),
            handle.owner(),
            handle.balance()
        );

        Ok(handle)
    }

    pub fn get_account(&self, id: &str) -> LedgerResult<AccountHandle> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound(AccountId::from(id)))
    }

    /// Moves `amount` from one account to another.
    ///
    /// Both accounts are resolved and locked, and the whole transfer is validated, before
    /// either balance changes. On failure neither account is touched.
    pub fn transfer(&self, from: &str, to: &str, amount: Money) -> LedgerResult {
        let source = self.get_account(from)?;
        let destination = self.get_account(to)?;

        if source.id() == destination.id() {
            return Err(LedgerError::SelfTransfer(source.id().clone()));
        }

        let (withdrawal, deposit) =
            Transaction::new_transfer(amount, source.id(), destination.id())?;

        let (mut source_state, mut destination_state) = lock_pair(&source, &destination);

        let source_balance = source_state.checked_withdraw(source.id(), amount)?;
        let destination_balance = destination_state.checked_deposit(amount)?;

        source_state.commit(source_balance, withdrawal);
        destination_state.commit(destination_balance, deposit);

        log::debug!(
            "Transferred {amount} from account {} ({source_balance}) to account {} ({destination_balance})",
            source.id(),
            destination.id()
        );

        Ok(())
    }

    /// Handles to every registered account, ordered by id
    pub fn accounts(&self) -> Vec<AccountHandle> {
        let mut accounts: Vec<AccountHandle> = self.read().values().cloned().collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));

        accounts
    }

    /// Point-in-time view of every account, ordered by id.
    ///
    /// Holds the registry read lock and every account lock, taken in id order like
    /// transfers do, while reading. No transfer is ever seen half applied.
    pub fn snapshot(&self) -> Vec<AccountSnapshot> {
        let registry = self.read();

        let mut accounts: Vec<&AccountHandle> = registry.values().collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));

        let states: Vec<MutexGuard<'_, AccountState>> =
            accounts.iter().map(|account| account.lock()).collect();

        let snapshots: Vec<AccountSnapshot> = accounts
            .iter()
            .zip(states.iter())
            .map(|(account, state)| state.snapshot(account))
            .collect();

        snapshots
    }

    /// Sum of all balances, read from one consistent snapshot. Transfers leave it unchanged.
    pub fn total_balance(&self) -> LedgerResult<Money> {
        self.snapshot()
            .iter()
            .try_fold(Money::ZERO, |total, account| -> LedgerResult<Money> {
                Ok(total.checked_add(account.balance)?)
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountId, AccountHandle>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountId, AccountHandle>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Locks two distinct accounts in id order, returning the guards as (source, destination)
fn lock_pair<'a>(
    source: &'a Account,
    destination: &'a Account,
) -> (MutexGuard<'a, AccountState>, MutexGuard<'a, AccountState>) {
    if source.id() < destination.id() {
        let source_state = source.lock();
        let destination_state = destination.lock();
        (source_state, destination_state)
    } else {
        let destination_state = destination.lock();
        let source_state = source.lock();
        (source_state, destination_state)
    }
}
