//! An in-memory stand-in for a browser page.
//!
//! Registered routes are consulted newest-first, mirroring how overrides
//! shadow earlier registrations in real automation engines. The first
//! matching route decides a request's fate; a pass-through decision leaves
//! the call unanswered, as there is no real backend behind the page.

use std::collections::HashMap;

use async_trait::async_trait;
use http::{Method, StatusCode};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use pizzasim_common::Result;
use pizzasim_mock::{InterceptedRequest, Page, RouteDecision, RouteHandler, RoutePattern};

use crate::error::{E2eError, E2eResult};

const DEFAULT_BASE: &str = "https://pizza.test/";

/// A scripted page: route table, key-value storage, navigation log.
pub struct ScriptedPage {
    base: Url,
    // Newest registration first.
    routes: Mutex<Vec<(RoutePattern, RouteHandler)>>,
    storage: Mutex<HashMap<String, String>>,
    visited: Mutex<Vec<String>>,
}

impl Default for ScriptedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedPage {
    pub fn new() -> Self {
        let base = Url::parse(DEFAULT_BASE).expect("default base URL parses");
        Self {
            base,
            routes: Mutex::new(Vec::new()),
            storage: Mutex::new(HashMap::new()),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn with_base(base: &str) -> E2eResult<Self> {
        let base = Url::parse(base).map_err(|e| E2eError::InvalidUrl(format!("{base}: {e}")))?;
        Ok(Self {
            base,
            routes: Mutex::new(Vec::new()),
            storage: Mutex::new(HashMap::new()),
            visited: Mutex::new(Vec::new()),
        })
    }

    /// Register an override route synchronously; shadows anything attached
    /// earlier.
    pub fn override_route(&self, pattern: RoutePattern, handler: RouteHandler) {
        self.routes.lock().insert(0, (pattern, handler));
    }

    /// Pre-populate a storage key, e.g. a stale token from a previous test.
    pub fn seed_storage(&self, key: &str, value: &str) {
        self.storage.lock().insert(key.to_string(), value.to_string());
    }

    pub fn storage_value(&self, key: &str) -> Option<String> {
        self.storage.lock().get(key).cloned()
    }

    pub fn set_storage(&self, key: &str, value: &str) {
        self.storage.lock().insert(key.to_string(), value.to_string());
    }

    pub fn remove_storage(&self, key: &str) {
        self.storage.lock().remove(key);
    }

    /// URLs navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    /// Issue a request the way the page's network stack would.
    pub fn fetch(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Value>,
    ) -> E2eResult<Fetched> {
        let url = self
            .base
            .join(path_and_query)
            .map_err(|e| E2eError::InvalidUrl(format!("{path_and_query}: {e}")))?;
        let req = InterceptedRequest::new(method.clone(), url.as_str(), body)?;

        let routes = self.routes.lock();
        for (pattern, handler) in routes.iter() {
            if pattern.matches(&req) {
                match handler(&req) {
                    RouteDecision::Fulfill(resp) => {
                        debug!(method = %method, url = %url, status = %resp.status, "fulfilled");
                        return Ok(Fetched { status: resp.status, body: resp.body });
                    }
                    RouteDecision::PassThrough => break,
                }
            }
        }
        debug!(method = %method, url = %url, "unrouted");
        Err(E2eError::Unrouted { method: method.to_string(), url: url.to_string() })
    }
}

#[async_trait]
impl Page for ScriptedPage {
    async fn route(&self, pattern: RoutePattern, handler: RouteHandler) -> Result<()> {
        debug!(pattern = %pattern, "route registered");
        self.routes.lock().insert(0, (pattern, handler));
        Ok(())
    }

    async fn clear_storage_key(&self, key: &str) -> Result<()> {
        self.storage.lock().remove(key);
        Ok(())
    }

    async fn goto(&self, url: &str) -> Result<()> {
        self.visited.lock().push(url.to_string());
        Ok(())
    }
}

/// The observable outcome of a fetched call.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: Value,
}

impl Fetched {
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body into a typed shape.
    pub fn json<T: DeserializeOwned>(&self) -> E2eResult<T> {
        serde_json::from_value(self.body.clone()).map_err(E2eError::from)
    }

    /// Fail with context unless the status is 2xx.
    pub fn expect_ok(self, context: &str) -> E2eResult<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(E2eError::UnexpectedStatus {
                status: self.status.as_u16(),
                context: context.to_string(),
                body: self.body.to_string(),
            })
        }
    }
}
