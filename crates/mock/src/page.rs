//! The page automation capability consumed by the simulator.

use std::sync::Arc;

use async_trait::async_trait;

use pizzasim_common::Result;

use crate::pattern::RoutePattern;
use crate::request::{InterceptedRequest, RouteDecision};

/// Interception handler invoked for every request matching its pattern.
///
/// Handlers must be reentrant-safe: overlapping in-flight requests dispatch
/// into the same shared session state without any serialization beyond its
/// own locking.
pub type RouteHandler = Arc<dyn Fn(&InterceptedRequest) -> RouteDecision + Send + Sync>;

/// The slice of browser-page automation the simulator needs: route
/// interception, storage clearing, and navigation.
///
/// Production suites back this with a real automation engine; tests use a
/// scripted in-memory page.
#[async_trait]
pub trait Page: Send + Sync {
    /// Register an interception route. Routes registered later shadow
    /// earlier ones for requests both would match, so tests can override
    /// individual resources after the defaults are attached.
    async fn route(&self, pattern: RoutePattern, handler: RouteHandler) -> Result<()>;

    /// Remove a persisted value from the page's local/session storage.
    async fn clear_storage_key(&self, key: &str) -> Result<()>;

    /// Navigate the page to a URL.
    async fn goto(&self, url: &str) -> Result<()>;
}
