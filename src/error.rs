use thiserror::Error;

/// Everything that can go wrong with a user action. All of these are
/// recoverable; the REPL prints the message and keeps going.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum BankError {
    #[error("credentials rejected")]
    CredentialsRejected,

    #[error("insufficient funds, balance is {balance:.2}")]
    InsufficientFunds { balance: f64 },

    #[error("no account named '{0}'")]
    RecipientNotFound(String),

    #[error("amount must be a positive number")]
    InvalidAmount,

    #[error("not logged in")]
    NotLoggedIn,
}
