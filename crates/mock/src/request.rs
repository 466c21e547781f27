//! Intercepted request and synthesized response model.

use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use pizzasim_common::{Error, Result};

/// An outbound HTTP call captured before it reaches any network.
#[derive(Debug, Clone)]
pub struct InterceptedRequest {
    method: Method,
    url: Url,
    body: Option<Value>,
}

impl InterceptedRequest {
    pub fn new(method: Method, url: &str, body: Option<Value>) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self { method, url, body })
    }

    pub fn get(url: &str) -> Result<Self> {
        Self::new(Method::GET, url, None)
    }

    pub fn put(url: &str, body: Value) -> Result<Self> {
        Self::new(Method::PUT, url, Some(body))
    }

    pub fn post(url: &str, body: Value) -> Result<Self> {
        Self::new(Method::POST, url, Some(body))
    }

    pub fn delete(url: &str) -> Result<Self> {
        Self::new(Method::DELETE, url, None)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Last non-empty path segment, if any.
    pub fn last_segment(&self) -> Option<&str> {
        self.url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
    }

    /// First value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Deserialize the JSON body into a typed shape.
    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self
            .body
            .as_ref()
            .ok_or_else(|| Error::InvalidBody("empty body".to_string()))?;
        serde_json::from_value(body.clone()).map_err(Error::from)
    }
}

/// A synthesized response, delivered to the page as if a real server had
/// answered.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl MockResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// A 200 response carrying the JSON form of `body`.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self {
            status: StatusCode::OK,
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }

    /// A 200 response with an empty JSON object body.
    pub fn ok_empty() -> Self {
        Self { status: StatusCode::OK, body: Value::Object(Default::default()) }
    }

    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(Error::from)
    }
}

/// What an interception handler decided to do with a call.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Answer the call with a synthesized response.
    Fulfill(MockResponse),
    /// Let the call proceed unmodified. In a test context there is no real
    /// backend behind it, so the page-side call stays unanswered.
    PassThrough,
}

impl RouteDecision {
    /// The response, if the decision was to fulfill.
    pub fn response(&self) -> Option<&MockResponse> {
        match self {
            RouteDecision::Fulfill(resp) => Some(resp),
            RouteDecision::PassThrough => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_params_and_segments() {
        let req = InterceptedRequest::get(
            "https://pizza.test/api/user?name=*Alice*&page=1",
        )
        .unwrap();
        assert_eq!(req.path(), "/api/user");
        assert_eq!(req.query_param("name").as_deref(), Some("*Alice*"));
        assert_eq!(req.query_param("page").as_deref(), Some("1"));
        assert_eq!(req.query_param("limit"), None);
        assert_eq!(req.last_segment(), Some("user"));
    }

    #[test]
    fn body_json_requires_a_body() {
        let req = InterceptedRequest::get("https://pizza.test/api/auth").unwrap();
        assert!(req.body_json::<Value>().is_err());

        let req = InterceptedRequest::put(
            "https://pizza.test/api/auth",
            json!({"email": "d@jwt.com", "password": "a"}),
        )
        .unwrap();
        let body: Value = req.body_json().unwrap();
        assert_eq!(body["email"], "d@jwt.com");
    }
}
