//! Correlation identifiers tying a failed response to its log lines.

use actix_web::HttpRequest;
use uuid::Uuid;

/// W3C trace context header set by the serverless front end.
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// Echoed on every response.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Correlation id for a request: the trace id of its `traceparent`, or a fresh UUID.
pub fn correlation_id(req: &HttpRequest) -> String {
    req.headers()
        .get(TRACEPARENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(trace_id_from_traceparent)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Extract the trace id from `{version}-{trace-id}-{parent-id}-{flags}`.
///
/// The trace id must be 32 lowercase hex digits and not all zeros.
pub fn trace_id_from_traceparent(value: &str) -> Option<String> {
    let mut parts = value.trim().split('-');
    let version = parts.next()?;
    let trace_id = parts.next()?;
    let parent_id = parts.next()?;
    parts.next()?;

    let is_lower_hex = |s: &str| s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));

    if version.len() != 2 || !is_lower_hex(version) || version == "ff" {
        return None;
    }
    if trace_id.len() != 32 || !is_lower_hex(trace_id) || trace_id.bytes().all(|b| b == b'0') {
        return None;
    }
    if parent_id.len() != 16 || !is_lower_hex(parent_id) {
        return None;
    }

    Some(trace_id.to_string())
}
