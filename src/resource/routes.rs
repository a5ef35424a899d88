//! Per-resource endpoint table.
//!
//! The backend is not uniform: some resources update with `POST`, others with
//! `PUT`; some list responses are bare arrays, others wrap the array in a named
//! field. None of this can be inferred, so each resource states it here.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::TransportError;
use crate::transport::{Body, Request, Verb};

/// Where the payload lives in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The body is the payload.
    Bare,
    /// The payload is under the named field (`{ "agents": [...] }`).
    Envelope(&'static str),
}

impl Shape {
    pub fn extract(&self, body: Value) -> Result<Value, TransportError> {
        match self {
            Shape::Bare => Ok(body),
            Shape::Envelope(field) => match body {
                Value::Object(mut map) => map.remove(*field).ok_or_else(|| {
                    TransportError::Decode(format!("response has no '{field}' field"))
                }),
                other => Err(TransportError::Decode(format!(
                    "expected an object with '{field}', got {}",
                    kind_of(&other)
                ))),
            },
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whether an operation carries the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Bearer,
}

impl Access {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Access::Bearer)
    }
}

/// Extra path segment and query parameters for a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub segment: Option<String>,
    pub params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// List from `<resource>/<segment>` instead of the collection root.
    pub fn at(segment: impl Into<String>) -> Self {
        Self {
            segment: Some(segment.into()),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value.to_string()),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segment.is_none() && self.params.is_empty()
    }
}

/// `search?location=Lekki&bedrooms=2`; empty for the collection root.
impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(segment) = &self.segment {
            f.write_str(segment)?;
        }
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Endpoint conventions for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    pub path: &'static str,
    pub list: Shape,
    pub item: Shape,
    pub update: Verb,
    /// Sub-path for status-only updates (`<path>/status`).
    pub status: Option<&'static str>,
    pub reads: Access,
    pub creates: Access,
    pub writes: Access,
}

impl Routes {
    /// Bare shapes, `POST` updates, everything protected.
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            list: Shape::Bare,
            item: Shape::Bare,
            update: Verb::Post,
            status: None,
            reads: Access::Bearer,
            creates: Access::Bearer,
            writes: Access::Bearer,
        }
    }

    pub fn list_shape(mut self, shape: Shape) -> Self {
        self.list = shape;
        self
    }

    pub fn item_shape(mut self, shape: Shape) -> Self {
        self.item = shape;
        self
    }

    pub fn update_with(mut self, verb: Verb) -> Self {
        self.update = verb;
        self
    }

    pub fn status_path(mut self, segment: &'static str) -> Self {
        self.status = Some(segment);
        self
    }

    /// List and fetch without credentials (public site pages).
    pub fn public_reads(mut self) -> Self {
        self.reads = Access::Public;
        self
    }

    /// Create without credentials (client submissions).
    pub fn public_creates(mut self) -> Self {
        self.creates = Access::Public;
        self
    }

    fn item_path(&self, key: &impl std::fmt::Display) -> String {
        format!("{}/{}", self.path, key)
    }

    pub fn list_request(&self, query: &Query) -> Request {
        let path = match &query.segment {
            Some(segment) => format!("{}/{}", self.path, segment),
            None => self.path.to_string(),
        };
        let mut request = Request::get(path).with_auth(self.reads.requires_auth());
        request.query = query.params.clone();
        request
    }

    pub fn fetch_request(&self, key: &impl std::fmt::Display) -> Request {
        Request::get(self.item_path(key)).with_auth(self.reads.requires_auth())
    }

    pub fn create_request(&self, body: Body) -> Request {
        Request::post(self.path, body).with_auth(self.creates.requires_auth())
    }

    pub fn update_request(&self, key: &impl std::fmt::Display, body: Body) -> Request {
        Request::new(self.update, self.item_path(key))
            .with_body(body)
            .with_auth(self.writes.requires_auth())
    }

    /// `PUT <path>/status` with `{ "id": key, "status": status }`, when the
    /// resource has a status endpoint.
    pub fn status_request(&self, key: &impl serde::Serialize, status: &str) -> Option<Request> {
        let segment = self.status?;
        let body = Body::Json(json!({ "id": key, "status": status }));
        Some(
            Request::put(format!("{}/{}", self.path, segment), body)
                .with_auth(self.writes.requires_auth()),
        )
    }

    pub fn delete_request(&self, key: &impl std::fmt::Display) -> Request {
        Request::delete(self.item_path(key)).with_auth(self.writes.requires_auth())
    }

    pub fn decode_list<R: DeserializeOwned>(&self, body: Value) -> Result<Vec<R>, TransportError> {
        Ok(serde_json::from_value(self.list.extract(body)?)?)
    }

    pub fn decode_item<R: DeserializeOwned>(&self, body: Value) -> Result<R, TransportError> {
        Ok(serde_json::from_value(self.item.extract(body)?)?)
    }
}
