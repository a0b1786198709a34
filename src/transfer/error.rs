//! Transfer error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Transfer has not been started")]
    NotStarted,

    #[error("Transfer has not completed")]
    NotCompleted,

    #[error("Transfer already finalized")]
    AlreadyFinalized,
}
