use thiserror::Error;

/// Failures of the monthly summary fetch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No credential was available, so no request was issued.
    #[error("no auth token available")]
    MissingToken,
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("failed to decode month summaries: {0}")]
    Decode(String),
}

/// Rejections raised by the account book.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("amount must be a non-negative whole number, got {0:?}")]
    InvalidAmount(String),
    #[error("unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("invalid diary id {0:?}, expected yyyyMMdd")]
    InvalidDiaryId(String),
}
