//! Transport - one network call per operation.
//!
//! A [`Transport`] turns a resource-relative [`Request`] into the decoded JSON
//! body of the response, or a [`TransportError`]. It never retries and never
//! interprets the payload; callers know each resource's shape.
//!
//! ```text
//! ResourceClient ──Request──▶ RetryTransport? ──▶ HttpTransport ──▶ <origin>/api/<path>
//!                ◀──Value────                 ◀──               ◀──
//! ```

mod http;
mod multipart;
mod retry;

pub use http::HttpTransport;
pub use multipart::{Attachment, MultipartForm, Part};
pub use retry::RetryTransport;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::TransportError;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    #[default]
    Empty,
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `multipart/form-data`; used whenever a file is attached.
    Multipart(MultipartForm),
}

impl Body {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, TransportError> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|e| TransportError::Encode(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}

/// One call against one resource endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Verb,
    /// Path below `/api/`, e.g. `agents/7`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Attach the bearer credential.
    pub auth: bool,
    pub body: Body,
}

impl Request {
    pub fn new(method: Verb, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            auth: false,
            body: Body::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Body) -> Self {
        Self::new(Verb::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Body) -> Self {
        Self::new(Verb::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Issues one network call and resolves to the parsed JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Value, TransportError> {
        (**self).send(request).await
    }
}

/// Pull the backend's human-readable `message` out of a JSON body.
pub(crate) fn body_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
