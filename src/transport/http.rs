use super::request::{RequestBody, RequestSpec};
use super::stream::{self, StreamChunk, StreamMode, StreamSummary};
use crate::config::ClientConfig;
use crate::response::{self, ResponseBody};
use crate::{Error, Result};
use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// Issues one HTTP request per call against a single base URL.
///
/// Holds no state besides the configuration it was built from; the inner
/// `reqwest::Client` is cheap to share.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, spec: RequestSpec) -> Result<reqwest::Response> {
        let url = spec.url(&self.base_url)?;
        debug!(method = %spec.method, path = %spec.path(), "sending request");

        let mut req = self
            .client
            .request(spec.method.clone(), url)
            .header(API_KEY_HEADER, &self.api_key);

        req = match spec.body {
            RequestBody::None => req,
            RequestBody::Json(body) => req.json(&body),
            RequestBody::Multipart(form) => req.multipart(form.into_reqwest().await?),
        };

        let mut request = req
            .build()
            .map_err(|e| Error::validation(format!("Invalid request: {}", e)))?;
        apply_overrides(request.headers_mut(), &spec.headers)?;

        self.client
            .execute(request)
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }

    fn content_type(resp: &reqwest::Response) -> Option<String> {
        resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    async fn error_from(resp: reqwest::Response) -> Error {
        let status = resp.status().as_u16();
        let body = match resp.bytes().await {
            Ok(b) => String::from_utf8_lossy(&b).into_owned(),
            Err(e) => return Error::Transport(TransportError::Http(e)),
        };
        let err = response::error_for_status(status, &body);
        if let Error::Api { kind, .. } = &err {
            warn!(http_status = status, kind = %kind, "API call failed");
        }
        err
    }

    /// Performs the request and returns the fully buffered body.
    pub async fn execute(&self, spec: RequestSpec) -> Result<ResponseBody> {
        let resp = self.send(spec).await?;
        let status = resp.status().as_u16();
        debug!(http_status = status, "response received");

        if !resp.status().is_success() {
            return Err(Self::error_from(resp).await);
        }

        let content_type = Self::content_type(&resp);
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let body = ResponseBody::from_parts(content_type.as_deref(), bytes)?;
        response::map_response(status, body)
    }

    /// Performs the request and hands the body to `on_chunk` as it arrives.
    ///
    /// On a non-2xx status the callback is never invoked and the mapped error is
    /// returned. The future resolves once the stream has been fully consumed.
    pub async fn execute_stream<F>(
        &self,
        spec: RequestSpec,
        mode: StreamMode,
        mut on_chunk: F,
    ) -> Result<StreamSummary>
    where
        F: FnMut(StreamChunk) -> Result<()>,
    {
        let resp = self.send(spec).await?;
        let status = resp.status().as_u16();
        debug!(http_status = status, ?mode, "stream opened");

        if !resp.status().is_success() {
            return Err(Self::error_from(resp).await);
        }

        let content_type = Self::content_type(&resp);
        let byte_stream = resp
            .bytes_stream()
            .map(|item| item.map_err(|e| Error::stream(e.to_string())));
        let (chunks, bytes) = stream::deliver(Box::pin(byte_stream), mode, &mut on_chunk).await?;
        debug!(chunks, bytes, "stream finished");

        Ok(StreamSummary {
            status,
            content_type,
            chunks,
            bytes,
        })
    }

    /// Convenience for endpoints that return audio bytes.
    pub async fn execute_bytes(&self, spec: RequestSpec) -> Result<Bytes> {
        self.execute(spec).await?.into_bytes()
    }

    /// Convenience for endpoints that return JSON.
    pub async fn execute_json<T: serde::de::DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        self.execute(spec).await?.deserialize()
    }
}

/// Applies caller overrides on top of the built request's headers.
///
/// Each override name ends up with exactly one value; the last override wins.
fn apply_overrides(headers: &mut HeaderMap, overrides: &[(String, String)]) -> Result<()> {
    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::validation(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::validation(format!("Invalid value for header '{}': {}", name, e)))?;
        headers.insert(name, value);
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
