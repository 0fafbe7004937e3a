use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount stored as a count of ten-thousandths.
///
/// Balances never go through floating point, so repeated deposits and withdrawals cannot
/// accumulate rounding error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Minor units per whole unit
    pub const SCALE: i64 = 10_000;

    const DECIMALS: usize = 4;

    /// Parses a decimal string with at most four fractional digits, e.g. `"12.5"` or `"-0.0001"`
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if unsigned.is_empty() {
            return Err(MoneyError::Parse("Empty amount", string.to_string()));
        }

        let mut parts = unsigned.split('.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(MoneyError::Parse("Invalid digit", string.to_string()));
        }

        if fraction.len() > Self::DECIMALS {
            return Err(MoneyError::Parse(
                "Too many fractional digits",
                string.to_string(),
            ));
        }

        let out_of_range = || MoneyError::Parse("Amount out of range", string.to_string());

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let fraction: i64 = format!("{:0<width$}", fraction, width = Self::DECIMALS)
            .parse()
            .map_err(|_| out_of_range())?;

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|minor| minor.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Ok(if negative { Money(-value) } else { Money(value) })
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        match self.0.checked_add(other.0) {
            Some(value) => Ok(Money(value)),
            None if other.0 > 0 => Err(MoneyError::Overflow("add", self, other)),
            None => Err(MoneyError::Underflow("add", self, other)),
        }
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        match self.0.checked_sub(other.0) {
            Some(value) => Ok(Money(value)),
            None if other.0 > 0 => Err(MoneyError::Underflow("sub", self, other)),
            None => Err(MoneyError::Overflow("sub", self, other)),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let minor = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();

        write!(
            f,
            "{sign}{}.{:0width$}",
            minor / scale,
            minor % scale,
            width = Self::DECIMALS
        )
    }
}
