use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid monetary amount: {amount}")]
    InvalidAmount { amount: f64 },
    #[error("debt {debt_id} not found")]
    NotFound { debt_id: String },
    #[error("invalid ledger document: {reason}")]
    InvalidDocument { reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
