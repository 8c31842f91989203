use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlarmError {
    #[error("price unavailable for {0}")]
    PriceUnavailable(String),

    #[error("invalid symbol: {0}")]
    BadSymbol(String),

    #[error("could not persist alarms: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("could not encode alarms: {0}")]
    Json(#[from] serde_json::Error),

    #[error("notification delivery failed: {0}")]
    Dispatch(String),
}
