//! PizzaSim Common Library
//!
//! Shared wire types and errors for the pizza-shop mock backend simulator.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// PizzaSim version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
