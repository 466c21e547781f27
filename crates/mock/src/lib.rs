//! PizzaSim Mock Backend Simulator
//!
//! Sits between a browser-driven UI test and a nonexistent backend: every
//! outbound HTTP call matching a configured route is answered locally from
//! in-memory, test-scoped state (auth session, user registry, token table,
//! caller-supplied fixtures). No real network is involved.
//!
//! The one entry point is [`attach`]: it clears persisted session keys from
//! the page's storage, installs an ordered set of interception routes, and
//! navigates the page to `/`.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      attach(page, options)                │
//! ├───────────────────────────────────────────────────────────┤
//! │  MockBackend                                              │
//! │    ├── route table: (methods, path pattern) → resource    │
//! │    │     evaluated first-match-wins per request           │
//! │    ├── SessionState: logged-in user, registry, tokens     │
//! │    └── fixtures: menu, orders, franchises, docs, users    │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod options;
pub mod page;
pub mod pattern;
pub mod request;
pub mod session;
pub mod simulator;

pub use options::{FranchiseFixture, MockOptions, OrderFixture, UserListFixture};
pub use page::{Page, RouteHandler};
pub use pattern::RoutePattern;
pub use request::{InterceptedRequest, MockResponse, RouteDecision};
pub use session::SessionState;
pub use simulator::{attach, MockBackend, ORDER_STORAGE_KEY, TOKEN_STORAGE_KEY};
