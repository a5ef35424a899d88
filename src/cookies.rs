//! Client-side cookie store holding the auth credential.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shared cookie jar. Clones see the same cookies, so a login on one
/// surface is visible to every transport built from the jar.
///
/// ```ignore
/// let jar = CookieJar::parse("auth_token=abc123; theme=dark");
/// assert_eq!(jar.get("auth_token").as_deref(), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Arc<RwLock<HashMap<String, String>>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(cookies: HashMap<String, String>) -> Self {
        Self {
            cookies: Arc::new(RwLock::new(cookies)),
        }
    }

    /// Parse a `Cookie` header (`a=1; b=2`). Pairs without `=` are skipped.
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self::from_map(cookies)
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .read()
            .ok()
            .and_then(|cookies| cookies.get(name).cloned())
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut cookies) = self.cookies.write() {
            cookies.insert(name.into(), value.into());
        }
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.cookies
            .write()
            .ok()
            .and_then(|mut cookies| cookies.remove(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.cookies
            .read()
            .map(|cookies| cookies.contains_key(name))
            .unwrap_or(false)
    }
}
