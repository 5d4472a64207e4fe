use crate::model::ReservationId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ReservationError {
    /// True for failures that end the current operation but leave the
    /// application usable: a vanished record or an absent required field.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReservationError::MissingField(_) | ReservationError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
