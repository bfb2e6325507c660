use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshStoreError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("store operation timed out")]
    Timeout,

    #[error("store operation failed: {0}")]
    Backend(String),
}
