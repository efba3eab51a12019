//! HTTP status classification for API errors.
//!
//! Every non-2xx response is classified into one [`ApiErrorKind`]. The table is a
//! closed enumeration: a status without its own variant lands in
//! [`ApiErrorKind::Other`] and keeps its numeric code on the error value.
//!
//! | Status | Kind                  |
//! |--------|-----------------------|
//! | 400    | `BadRequest`          |
//! | 401    | `Authentication`      |
//! | 402    | `PaymentRequired`     |
//! | 403    | `Forbidden`           |
//! | 404    | `NotFound`            |
//! | 422    | `UnprocessableEntity` |
//! | 429    | `RateLimit`           |
//! | 503    | `ServiceUnavailable`  |
//! | other  | `Other`               |
//!
//! ## Example
//!
//! ```rust
//! use elevenlabs_client::error_code::ApiErrorKind;
//!
//! let kind = ApiErrorKind::from_http_status(429);
//! assert_eq!(kind, ApiErrorKind::RateLimit);
//! assert_eq!(kind.name(), "rate_limit");
//! assert!(kind.retryable());
//! ```

use std::fmt;

/// Kind of a failed API call, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400: malformed request or invalid parameters
    BadRequest,
    /// 401: missing or invalid API key
    Authentication,
    /// 402: the account has run out of credits or needs a paid plan
    PaymentRequired,
    /// 403: valid key without access to the resource
    Forbidden,
    /// 404: unknown voice, model, history item or route
    NotFound,
    /// 422: request body failed server-side validation
    UnprocessableEntity,
    /// 429: too many requests or concurrency limit reached
    RateLimit,
    /// 503: service temporarily unavailable
    ServiceUnavailable,
    /// Any other non-2xx status
    Other,
}

impl ApiErrorKind {
    /// Maps a non-2xx HTTP status code to its kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::UnprocessableEntity,
            429 => Self::RateLimit,
            503 => Self::ServiceUnavailable,
            _ => Self::Other,
        }
    }

    /// Returns the snake_case name (e.g., `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Authentication => "authentication",
            Self::PaymentRequired => "payment_required",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::RateLimit => "rate_limit",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Other => "api_error",
        }
    }

    /// Message used when the response body carries nothing readable.
    pub fn default_message(&self, status: u16) -> String {
        match self {
            Self::Authentication => "Invalid API key".to_string(),
            _ => format!("HTTP {}", status),
        }
    }

    /// Whether a caller could reasonably try the same request again later.
    ///
    /// The library itself never retries; this is a hint for callers.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::RateLimit | Self::ServiceUnavailable)
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
