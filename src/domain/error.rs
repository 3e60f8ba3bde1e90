#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("income must be a positive number, got {0:?}")]
    InvalidIncome(String),

    #[error("expense amount must be a positive number, got {0:?}")]
    InvalidAmount(String),

    #[error("expense date must be a YYYY-MM-DD calendar date, got {0:?}")]
    InvalidDate(String),

    #[error("no session named {0:?}")]
    UnknownUser(String),

    #[error("session {0:?} is no longer accepting requests")]
    SessionClosed(String),

    #[error("script error: {0}")]
    Script(String),
}
