//! Per-call time budget for store operations.

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;
use serde_json::json;

/// Runs a store call, giving up after `limit`.
///
/// The budget starts when this function is awaited. On expiry the inner future
/// is dropped, which cancels the call, and [`AppError::Unavailable`] is returned.
pub async fn bounded<T, F>(limit: Duration, operation: &'static str, call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                operation,
                timeout_ms = limit.as_millis() as u64,
                "Store call timed out"
            );
            Err(AppError::unavailable(
                "Store did not respond in time",
                json!({ "operation": operation }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_completes_within_budget() {
        let result = bounded(Duration::from_secs(5), "count", async { Ok::<_, AppError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_as_unavailable() {
        let result = bounded(Duration::from_secs(5), "count", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, AppError>(7)
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Unavailable { .. }));
        assert_eq!(err.to_error_info().details["operation"], "count");
    }

    #[tokio::test(start_paused = true)]
    async fn test_inner_error_passes_through() {
        let result: Result<(), _> = bounded(Duration::from_secs(5), "delete", async {
            Err(AppError::internal("Database error", json!({})))
        })
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
