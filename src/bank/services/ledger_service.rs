use crate::events::{DepositEvent, LedgerEvent, OpenEvent, TransferEvent, WithdrawEvent};
use crate::{AccountReport, Ledger, Result};

/// Applies parsed ledger events to a ledger
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn process_event(&self, event: LedgerEvent) -> Result {
        log::debug!("Processing ledger event: {event:?}");

        match event {
            LedgerEvent::Open(event) => self.process_open_event(event)?,

            LedgerEvent::Deposit(event) => self.process_deposit_event(event)?,

            LedgerEvent::Withdraw(event) => self.process_withdraw_event(event)?,

            LedgerEvent::Transfer(event) => self.process_transfer_event(event)?,
        }

        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// One report row per account, ordered by account id
    pub fn build_report(&self) -> Vec<AccountReport> {
        self.ledger
            .snapshot()
            .iter()
            .map(AccountReport::from)
            .collect()
    }

    fn process_open_event(&self, event: OpenEvent) -> Result {
        let account =
            self.ledger
                .create_account(event.account_id, event.owner, event.initial_balance)?;

        log::debug!("Opened account: {account:?}");

        Ok(())
    }

    fn process_deposit_event(&self, event: DepositEvent) -> Result {
        let account = self.ledger.get_account(event.account_id.as_str())?;

        account.deposit(event.amount)?;

        Ok(())
    }

    fn process_withdraw_event(&self, event: WithdrawEvent) -> Result {
        let account = self.ledger.get_account(event.account_id.as_str())?;

        account.withdraw(event.amount)?;

        Ok(())
    }

    fn process_transfer_event(&self, event: TransferEvent) -> Result {
        self.ledger
            .transfer(event.from.as_str(), event.to.as_str(), event.amount)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::AccountId;
    use crate::{LedgerError, Money};

    const SOME_AMOUNT: Money = Money(300000);

    fn open(id: &str, owner: &str, balance: Money) -> LedgerEvent {
        LedgerEvent::Open(OpenEvent {
            account_id: AccountId::from(id),
            owner: owner.to_string(),
            initial_balance: balance,
        })
    }

    fn build_service() -> LedgerService {
        let service = LedgerService::new(Ledger::new());

        service.process_event(open("1", "Alice", Money(1000000))).unwrap();
        service.process_event(open("2", "Bob", Money(500000))).unwrap();

        service
    }

    #[test]
    fn process_deposit_and_withdraw() {
        let service = build_service();

        service
            .process_event(LedgerEvent::Deposit(DepositEvent {
                account_id: AccountId::from("2"),
                amount: SOME_AMOUNT,
            }))
            .unwrap();
        service
            .process_event(LedgerEvent::Withdraw(WithdrawEvent {
                account_id: AccountId::from("2"),
                amount: Money(100000),
            }))
            .unwrap();

        let bob = service.ledger().get_account("2").unwrap();
        assert_eq!(bob.balance(), Money(700000));
        assert_eq!(bob.transaction_count(), 2);
    }

    #[test]
    fn process_transfer() {
        let service = build_service();

        service
            .process_event(LedgerEvent::Transfer(TransferEvent {
                from: AccountId::from("1"),
                to: AccountId::from("2"),
                amount: SOME_AMOUNT,
            }))
            .unwrap();

        assert_eq!(
            service.build_report(),
            vec![
                AccountReport {
                    account: "1".to_string(),
                    owner: "Alice".to_string(),
                    balance: "70.0000".to_string(),
                    transactions: 1,
                },
                AccountReport {
                    account: "2".to_string(),
                    owner: "Bob".to_string(),
                    balance: "80.0000".to_string(),
                    transactions: 1,
                },
            ]
        );
    }

    #[test]
    fn ledger_errors_stay_typed() {
        let service = build_service();

        let err = service
            .process_event(LedgerEvent::Withdraw(WithdrawEvent {
                account_id: AccountId::from("999"),
                amount: SOME_AMOUNT,
            }))
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LedgerError>(),
            Some(&LedgerError::AccountNotFound(AccountId::from("999")))
        );

        let err = service.process_event(open("1", "Mallory", Money::ZERO)).unwrap_err();

        assert_eq!(
            err.downcast_ref::<LedgerError>(),
            Some(&LedgerError::AccountAlreadyExists(AccountId::from("1")))
        );
    }
}
