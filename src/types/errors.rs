use std::fmt;

// === StorageError ===

/// Errors raised by the persistence layer.
///
/// These never reach callers of the public store API: every store operation
/// catches them, logs, and degrades to a safe default (empty list / false / 0).
#[derive(Debug)]
pub enum StorageError {
    /// The underlying read or write against the slot table failed.
    Unavailable(String),
    /// A stored slot value could not be serialized or deserialized.
    Malformed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Malformed(msg) => write!(f, "Stored value malformed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === RequestError ===

/// Errors raised on the requester side of the coordination layer.
#[derive(Debug)]
pub enum RequestError {
    /// The store-owning task went away before the response arrived.
    Dropped(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Dropped(msg) => write!(f, "Request dropped: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}
