//! PizzaSim E2E Harness
//!
//! Drives the mock backend simulator the way the real UI test-suite would:
//! a scripted in-memory page stands in for the browser, a small API client
//! mirrors the app's service layer, and scenario functions replay complete
//! user flows (login and order, franchisee dashboard, admin user
//! management).

pub mod client;
pub mod error;
pub mod fixtures;
pub mod page;
pub mod scenario;

pub use client::PizzaClient;
pub use error::{E2eError, E2eResult};
pub use page::{Fetched, ScriptedPage};
pub use scenario::{login_and_order, run_load, LoadReport};
