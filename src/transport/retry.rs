use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{Request, Transport};
use crate::error::TransportError;

/// Transport that immediately re-issues a failed request.
///
/// Only for idempotent reads (dashboard statistics): a request is attempted
/// at most `retries + 1` times with no delay in between, then the last
/// error surfaces.
#[derive(Clone)]
pub struct RetryTransport {
    inner: Arc<dyn Transport>,
    retries: u32,
}

impl RetryTransport {
    pub const DEFAULT_RETRIES: u32 = 3;

    pub fn new(inner: Arc<dyn Transport>) -> Self {
        Self {
            inner,
            retries: Self::DEFAULT_RETRIES,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }
}

#[async_trait]
impl Transport for RetryTransport {
    async fn send(&self, request: Request) -> Result<Value, TransportError> {
        let mut remaining = self.retries;
        loop {
            match self.inner.send(request.clone()).await {
                Ok(value) => return Ok(value),
                Err(err) if remaining > 0 => {
                    remaining -= 1;
                    debug!(path = %request.path, remaining, error = %err, "retrying request");
                }
                Err(err) => return Err(err),
            }
        }
    }
}
