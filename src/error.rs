use thiserror::Error;

/// Failure of a single network call.
///
/// 4xx and 5xx are not distinguished by callers; every variant is terminal
/// for the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        /// The `message` field of the error body, when the backend sent one.
        message: Option<String>,
    },
    /// Connection, DNS, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the JSON shape the resource expects.
    #[error("decode error: {0}")]
    Decode(String),
    /// The request body could not be built.
    #[error("encode error: {0}")]
    Encode(String),
}

impl TransportError {
    /// The message the backend put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Human-readable message: the server's own text when present.
    pub fn message(&self) -> String {
        match self.server_message() {
            Some(message) => message.to_string(),
            None => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

/// Client-side check that blocks a mutation before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0}")]
    Unsupported(String),
}

/// Routing failure inside the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no container registered for resource '{0}'")]
    UnknownResource(String),
    #[error("outcome routed to '{0}' does not match its container type")]
    TypeMismatch(&'static str),
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("backend origin is not configured (set {0})")]
    MissingOrigin(&'static str),
    #[error("invalid backend origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage lock poisoned")]
    LockPoisoned,
    #[error("failed to encode stored value: {0}")]
    Encode(String),
    #[error("failed to decode stored value: {0}")]
    Decode(String),
}

/// Any error surfaced by the client facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
