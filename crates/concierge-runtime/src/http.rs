//! HTTP error mapping shared by the REST providers

use concierge_core::ConciergeError;
use reqwest::StatusCode;

/// Map a transport failure (connect, timeout, decode)
pub fn transport_error(provider: &str, err: &reqwest::Error) -> ConciergeError {
    if err.is_timeout() || err.is_connect() {
        ConciergeError::ProviderUnavailable(format!("{provider}: {err}"))
    } else if err.is_decode() {
        ConciergeError::Parse(format!("{provider}: {err}"))
    } else {
        ConciergeError::Provider(format!("{provider}: {err}"))
    }
}

/// Map a non-2xx response
pub fn status_error(provider: &str, status: StatusCode, detail: &str) -> ConciergeError {
    let message = if detail.is_empty() {
        format!("{provider} returned {status}")
    } else {
        format!("{provider} returned {status}: {detail}")
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ConciergeError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => ConciergeError::RateLimited(message),
        s if s.is_server_error() => ConciergeError::ProviderUnavailable(message),
        _ => ConciergeError::Provider(message),
    }
}
