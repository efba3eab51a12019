//! Request descriptors handed to [`HttpTransport`](super::HttpTransport).

use super::multipart::MultipartForm;
use crate::{Error, Result};
use reqwest::Method;
use serde::Serialize;
use url::Url;

/// A single query parameter value. Lists are sent as repeated keys.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl QueryValue {
    fn push_encoded(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            QueryValue::Str(s) => out.push((key.to_string(), s.clone())),
            QueryValue::Int(i) => out.push((key.to_string(), i.to_string())),
            QueryValue::Float(f) => out.push((key.to_string(), f.to_string())),
            QueryValue::Bool(b) => out.push((key.to_string(), b.to_string())),
            QueryValue::List(items) => {
                for item in items {
                    out.push((key.to_string(), item.clone()));
                }
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<&String> for QueryValue {
    fn from(v: &String) -> Self {
        QueryValue::Str(v.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(i64::from(v))
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        QueryValue::Float(v)
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Bool(v)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        QueryValue::List(v)
    }
}

/// Ordered query parameters where absent values are dropped before serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, Option<QueryValue>)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.pairs.push((key.into(), Some(value.into())));
        self
    }

    pub fn push_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.pairs.push((key.into(), value.map(Into::into)));
        self
    }

    /// Key/value pairs that will actually be sent, in insertion order.
    pub fn encoded_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.pairs.len());
        for (key, value) in &self.pairs {
            if let Some(value) = value {
                value.push_encoded(key, &mut out);
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.iter().all(|(_, v)| v.is_none())
    }
}

/// Request payload.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    None,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// Everything needed to issue one API call. Built per call and consumed by the transport.
#[derive(Debug)]
pub struct RequestSpec {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Query,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Path segments are percent-encoded individually, so ids may contain any character.
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Query::new(),
            body: RequestBody::None,
            headers: Vec::new(),
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn patch(segments: &[&str]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// `/`-joined path, for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Resolves the full URL against `base`, keeping any path prefix the base carries.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::configuration(format!("Base URL cannot be a base: {}", base)))?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
        }
        let pairs = self.query.encoded_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}
