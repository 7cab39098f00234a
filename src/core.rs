use thiserror::Error;

pub mod utils;

/// Errors returned by `fsref-kit`.
#[derive(Debug, Error)]
pub enum Error {
    /// A reference is empty, has no resolvable parent, or is of the wrong kind
    /// for the requested operation.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// An OS-level failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
