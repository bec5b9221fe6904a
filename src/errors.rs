use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Unknown membership plan: `{0}`")]
    UnknownPlan(String),
    #[error("Unknown shop item: `{0}`")]
    UnknownItem(String),
}
