//! Where the current request's trace id lives.
//!
//! `RequestTrace` puts the id in two places: a tokio task-local, read by
//! code that has no request handle (error rendering, DB error mapping),
//! and a [`TraceId`] request extension, read by middleware.

use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;
use tokio::task_local;

const UNKNOWN: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Per-request trace id stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    /// The id `RequestTrace` attached to `req`, or `"unknown"`.
    pub fn of(req: &ServiceRequest) -> String {
        req.extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Trace id of the request being served on this task, if any.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Like [`current`], falling back to `"unknown"`.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` as the task's trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
