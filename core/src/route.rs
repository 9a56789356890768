//! Route templates and the concrete requests built from them.
//!
//! # Design
//! A `Route` is an immutable (method, URL) pair whose URL may hold one `{}`
//! placeholder for a path segment. Routes are built once when the client is
//! constructed (see `endpoints`) and never change afterwards. Filling the
//! placeholder produces a `ConcreteRequest`, a plain value the transport can
//! dispatch; adding query parameters consumes it and returns a new one.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use url::Url;

use crate::error::ClientError;
use crate::http::HttpMethod;

/// Marker replaced by the path value in a route URL.
pub const PLACEHOLDER: &str = "{}";

// WHATWG path-segment set: the path set plus `/` and `%`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encode `value` as one path segment. `.` and `..` are escaped too,
/// otherwise they would be read as relative path steps.
fn encode_segment(value: &str) -> String {
    match value {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(value, PATH_SEGMENT).to_string(),
    }
}

/// The value substituted into a route's path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    Name(String),
    Id(u32),
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathValue::Name(name) => f.write_str(name),
            PathValue::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for PathValue {
    fn from(name: &str) -> Self {
        PathValue::Name(name.to_string())
    }
}

impl From<u32> for PathValue {
    fn from(id: u32) -> Self {
        PathValue::Id(id)
    }
}

/// An HTTP method plus a URL template with at most one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: HttpMethod,
    url: String,
}

impl Route {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_placeholder(&self) -> bool {
        self.url.contains(PLACEHOLDER)
    }

    /// Fill the placeholder with `value`, percent-encoded as a single path
    /// segment. Anything after the placeholder (e.g. `?region=japan`) is kept
    /// as written. Templates without a placeholder ignore `value`.
    pub fn generate_route(&self, value: Option<&PathValue>) -> Result<ConcreteRequest, ClientError> {
        let Some((prefix, suffix)) = self.url.split_once(PLACEHOLDER) else {
            return Ok(ConcreteRequest::new(self.method, self.url.clone()));
        };
        let value = value.ok_or(ClientError::MissingArgument("route path value"))?;

        let url = Url::parse(prefix)?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        let base = url.as_str().trim_end_matches('/');
        let segment = encode_segment(&value.to_string());

        Ok(ConcreteRequest::new(self.method, format!("{base}/{segment}{suffix}")))
    }
}

/// A route with its placeholder filled, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ConcreteRequest {
    fn new(method: HttpMethod, uri: String) -> Self {
        Self {
            method,
            uri,
            params: Vec::new(),
            body: None,
        }
    }

    /// Replace the query parameters. Method, URI and body are untouched.
    pub fn with_params<I, K, V>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: params.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ..self
        }
    }

    pub fn with_body(self, body: Value) -> Self {
        Self {
            body: Some(body),
            ..self
        }
    }
}
