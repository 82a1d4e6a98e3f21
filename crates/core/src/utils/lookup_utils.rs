use std::future::Future;
use std::time::Duration;

use log::warn;

use crate::errors::{Error, ResolutionError, Result};

/// Runs a collaborator lookup under `timeout`.
///
/// Failures are reported per call as a recoverable [`ResolutionError`] naming
/// what was being looked up. Resolution errors raised by the collaborator
/// itself pass through unchanged.
pub async fn bounded_lookup<T, F>(what: &str, timeout: Duration, lookup: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(Error::Resolution(e))) => Err(Error::Resolution(e)),
        Ok(Err(e)) => {
            warn!("Lookup of {} failed: {}", what, e);
            Err(ResolutionError::LookupFailed {
                what: what.to_string(),
                cause: e.to_string(),
            }
            .into())
        }
        Err(_) => {
            warn!("Lookup of {} timed out after {:?}", what, timeout);
            Err(ResolutionError::Timeout {
                what: what.to_string(),
                after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timeout_is_reported_as_resolution_error() {
        let result: Result<()> = bounded_lookup("circles", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(())
        })
        .await;

        match result {
            Err(Error::Resolution(ResolutionError::Timeout { what, after_ms })) => {
                assert_eq!(what, "circles");
                assert_eq!(after_ms, 10);
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_repository_error_becomes_lookup_failure() {
        let result: Result<Vec<u8>> = bounded_lookup("lots", Duration::from_secs(1), async {
            Err(Error::Repository("connection reset".to_string()))
        })
        .await;

        let err = result.unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("connection reset"));
    }
}
