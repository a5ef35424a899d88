use crate::error::{TransportError, ValidationError};
use crate::transport::Body;

/// Encodes a create/update payload into a request body.
///
/// Implementations own the entity's field-name conventions; the generic
/// client only calls `validate` then `encode`.
pub trait Encode: Send + Sync {
    /// Required-field checks run before any request is issued.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn encode(&self) -> Result<Body, TransportError>;
}

/// Draft type for read-only resources. Uninhabited, so create and update
/// cannot be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnly {}

impl Encode for ReadOnly {
    fn encode(&self) -> Result<Body, TransportError> {
        match *self {}
    }
}

/// Fail with `MissingField` when `value` is blank.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
