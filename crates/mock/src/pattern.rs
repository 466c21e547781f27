//! Method-and-path route patterns.
//!
//! A pattern matches on method and path together. The simulator evaluates an
//! ordered table of (pattern, resource) pairs first-match-wins per request,
//! which removes the ambiguity of path-only globbing where `/api/user/me`,
//! `/api/user/42` and `/api/user` would otherwise fight over the same calls.

use http::Method;
use regex_lite::Regex;

use pizzasim_common::{Error, Result};

use crate::request::InterceptedRequest;

/// A compiled interception pattern.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    methods: Option<Vec<Method>>,
    path: Regex,
    source: String,
}

impl RoutePattern {
    /// Compile a pattern from a path regex, matching any method.
    ///
    /// The regex is anchored to the whole request path.
    pub fn any_method(path: &str) -> Result<Self> {
        Self::compile(None, path)
    }

    /// Compile a pattern restricted to the given methods.
    pub fn for_methods(methods: &[Method], path: &str) -> Result<Self> {
        Self::compile(Some(methods.to_vec()), path)
    }

    fn compile(methods: Option<Vec<Method>>, path: &str) -> Result<Self> {
        let anchored = format!("^{}$", path);
        let regex = Regex::new(&anchored).map_err(|e| Error::InvalidPattern {
            pattern: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { methods, path: regex, source: path.to_string() })
    }

    /// Whether this pattern matches the request's method and path.
    pub fn matches(&self, req: &InterceptedRequest) -> bool {
        if let Some(methods) = &self.methods {
            if !methods.contains(req.method()) {
                return false;
            }
        }
        self.path.is_match(req.path())
    }

    /// The source path expression, for logging.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.methods {
            Some(methods) => {
                let names: Vec<&str> = methods.iter().map(|m| m.as_str()).collect();
                write!(f, "{} {}", names.join("|"), self.source)
            }
            None => write!(f, "* {}", self.source),
        }
    }
}
