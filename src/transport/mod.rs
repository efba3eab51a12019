//! HTTP transport: request descriptors, multipart uploads and streaming delivery.

pub mod http;
pub mod multipart;
pub mod request;
pub mod stream;

pub use http::{HttpTransport, TransportError, API_KEY_HEADER};
pub use multipart::{FilePart, MultipartForm, PartSource};
pub use request::{Query, QueryValue, RequestBody, RequestSpec};
pub use stream::{JsonLineBuffer, StreamChunk, StreamMode, StreamSummary};
