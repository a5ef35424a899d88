//! reqwest-backed transport against `<origin>/api/<path>`.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::{body_message, Body, Request, Transport, Verb};
use crate::config::ClientConfig;
use crate::cookies::CookieJar;
use crate::error::TransportError;

/// Bearer value sent when the auth cookie is absent. The backend rejects it;
/// nothing is validated client-side.
const MISSING_TOKEN: &str = "undefined";

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
    cookies: CookieJar,
}

impl HttpTransport {
    pub fn new(config: ClientConfig, cookies: CookieJar) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            client,
            config,
            cookies,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    fn method(verb: Verb) -> reqwest::Method {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Value, TransportError> {
        let url = self.config.endpoint(&request.path);
        debug!(method = request.method.as_str(), %url, auth = request.auth, "sending request");

        let mut builder = self.client.request(Self::method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if request.auth {
            let token = self
                .cookies
                .get(&self.config.auth_cookie)
                .unwrap_or_else(|| MISSING_TOKEN.to_string());
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(form) => builder.multipart(form.into_reqwest()?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        debug!(%url, status = status.as_u16(), len = bytes.len(), "response received");

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .as_ref()
                .and_then(body_message);
            warn!(%url, status = status.as_u16(), ?message, "request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
