#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage quota exceeded writing {key:?}: needed {needed} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Error {
    pub fn unavailable(msg: impl ToString) -> Error {
        Error::StorageUnavailable(msg.to_string())
    }

    /// Whether retrying the same write later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Error::StorageUnavailable(_) => true,
            Error::QuotaExceeded { .. } => true,
            Error::Corrupt(_) => false,
            Error::Unknown(_) => false,
        }
    }
}
