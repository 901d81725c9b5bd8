//! Task-local trace context for web requests.
//!
//! Exposes the current request's trace_id to anything on the request path,
//! most importantly error rendering, without threading it through every
//! signature. The scope is established by `RequestTrace` middleware.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Get the trace_id for the current task.
/// Returns "unknown" outside of a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with the given trace_id in scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn visible_inside_scope() {
        let result = with_trace_id("trace-abc".to_string(), async {
            assert_eq!(trace_id(), "trace-abc");
            "done"
        })
        .await;
        assert_eq!(result, "done");
        assert_eq!(trace_id(), "unknown");
    }
}
