use crate::events::{DepositEvent, LedgerEvent, OpenEvent, TransferEvent, WithdrawEvent};
use crate::ids::AccountId;
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents an input command that a CSV row would deserialize into
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InputCommand {
    #[serde(rename = "type")]
    pub typ: InputCommandType,

    pub account: String,
    pub counterparty: Option<String>,
    pub owner: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputCommandType {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input command: owner missing from open: {0:?}")]
    NoOwner(InputCommand),

    #[error("Error parsing input command: amount missing: {0:?}")]
    NoAmount(InputCommand),

    #[error("Error parsing input command: counterparty missing from transfer: {0:?}")]
    NoCounterparty(InputCommand),
}

impl InputCommand {
    pub fn parse_event(self) -> Result<LedgerEvent> {
        let account_id = AccountId::new(self.account.as_str());

        let event = match self.typ {
            InputCommandType::Open => {
                let owner = self
                    .owner
                    .clone()
                    .ok_or_else(|| InputParseError::NoOwner(self.clone()))?;

                let initial_balance = match &self.amount {
                    Some(amount) => Money::parse(amount)?,
                    None => Money::ZERO,
                };

                LedgerEvent::Open(OpenEvent {
                    account_id,
                    owner,
                    initial_balance,
                })
            }
            InputCommandType::Deposit => LedgerEvent::Deposit(DepositEvent {
                account_id,
                amount: self.required_amount()?,
            }),
            InputCommandType::Withdraw => LedgerEvent::Withdraw(WithdrawEvent {
                account_id,
                amount: self.required_amount()?,
            }),
            InputCommandType::Transfer => {
                let to = self
                    .counterparty
                    .clone()
                    .ok_or_else(|| InputParseError::NoCounterparty(self.clone()))?;

                LedgerEvent::Transfer(TransferEvent {
                    from: account_id,
                    to: AccountId::new(to),
                    amount: self.required_amount()?,
                })
            }
        };

        Ok(event)
    }

    fn required_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .as_deref()
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        Ok(Money::parse(amount)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use csv::{ReaderBuilder, Trim};

    fn read_commands(data: &str) -> Vec<InputCommand> {
        ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(data.as_bytes())
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    fn build_command(
        typ: InputCommandType,
        counterparty: Option<&str>,
        owner: Option<&str>,
        amount: Option<&str>,
    ) -> InputCommand {
        InputCommand {
            typ,
            account: "1".to_string(),
            counterparty: counterparty.map(str::to_string),
            owner: owner.map(str::to_string),
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn deserialize_all_command_types() {
        let commands = read_commands(
            "type,account,counterparty,owner,amount\n\
             open, 1, , Alice, 100\n\
             deposit, 1, , , 2.5\n\
             withdraw, 1, , , 0.5\n\
             transfer, 1, 2, , 30\n",
        );

        assert_eq!(
            commands,
            vec![
                build_command(InputCommandType::Open, None, Some("Alice"), Some("100")),
                build_command(InputCommandType::Deposit, None, None, Some("2.5")),
                build_command(InputCommandType::Withdraw, None, None, Some("0.5")),
                build_command(InputCommandType::Transfer, Some("2"), None, Some("30")),
            ]
        );
    }

    #[test]
    fn parse_open() {
        let event = build_command(InputCommandType::Open, None, Some("Alice"), Some("100"))
            .parse_event()
            .unwrap();

        assert_eq!(
            event,
            LedgerEvent::Open(OpenEvent {
                account_id: AccountId::from("1"),
                owner: "Alice".to_string(),
                initial_balance: Money(1000000),
            })
        );
    }

    #[test]
    fn parse_open_defaults_to_zero_balance() {
        let event = build_command(InputCommandType::Open, None, Some("Alice"), None)
            .parse_event()
            .unwrap();

        assert!(matches!(
            event,
            LedgerEvent::Open(OpenEvent {
                initial_balance: Money::ZERO,
                ..
            })
        ));
    }

    #[test]
    fn parse_transfer() {
        let event = build_command(InputCommandType::Transfer, Some("2"), None, Some("30"))
            .parse_event()
            .unwrap();

        assert_eq!(
            event,
            LedgerEvent::Transfer(TransferEvent {
                from: AccountId::from("1"),
                to: AccountId::from("2"),
                amount: Money(300000),
            })
        );
    }

    #[test]
    fn fail_to_parse_missing_fields() {
        let no_owner = build_command(InputCommandType::Open, None, None, Some("1"));
        let err = no_owner.parse_event().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NoOwner(_))
        ));

        let no_amount = build_command(InputCommandType::Deposit, None, None, None);
        let err = no_amount.parse_event().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NoAmount(_))
        ));

        let no_counterparty = build_command(InputCommandType::Transfer, None, None, Some("1"));
        let err = no_counterparty.parse_event().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputParseError>(),
            Some(InputParseError::NoCounterparty(_))
        ));
    }

    #[test]
    fn fail_to_parse_malformed_amount() {
        let command = build_command(InputCommandType::Withdraw, None, None, Some("1.2.3"));

        let err = command.parse_event().unwrap_err();

        assert!(err.downcast_ref::<crate::MoneyError>().is_some());
    }
}
