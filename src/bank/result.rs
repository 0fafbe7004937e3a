use crate::error::LedgerError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Result of a core ledger operation, keeping the failure kind typed for callers
pub type LedgerResult<T = ()> = std::result::Result<T, LedgerError>;
