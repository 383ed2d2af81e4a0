use thiserror::Error;

/// Calls the session rejects. Rejection never changes state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no exercise is active")]
    NotActive,

    #[error("{0} is not a calculator button")]
    InvalidDenomination(u64),
}

pub type Result<T> = std::result::Result<T, SessionError>;
