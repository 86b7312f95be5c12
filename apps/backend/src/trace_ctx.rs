//! Task-local trace context for web requests.
//!
//! Middleware establishes the scope once per request; error rendering
//! and log statements read it from anywhere below without threading a
//! value through every call. Core/service code should not import this
//! module directly.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or "unknown" outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Runs `future` with the given trace id in scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
