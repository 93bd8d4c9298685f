//! Bounded retry combinator.
//!
//! A small helper that retries an async operation a fixed number of times
//! with a fixed delay between attempts, independent of what the operation
//! does. The registration flow uses it for profile creation; nothing else
//! in the client retries.

use std::future::Future;
use std::time::Duration;

/// Run `op` up to `max_attempts` times, sleeping `delay` between attempts.
///
/// Returns the first `Ok`, or the error from the final attempt. The delay
/// is not applied after the last attempt. `max_attempts` of zero is
/// treated as one attempt.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use titledesk::retry::with_retries;
///
/// let result = with_retries(3, Duration::from_secs(2), || api.create_profile(&req)).await;
/// ```
pub async fn with_retries<T, E, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = max_attempts.max(1);

    let mut last_err = None;
    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!("attempt {}/{} failed", attempt, attempts);
                last_err = Some(err);
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    // attempts >= 1, so at least one error was recorded
    Err(last_err.expect("retry loop ran at least once"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_attempt_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in = calls.clone();

        let result: Result<u32, &str> = with_retries(3, Duration::from_millis(1), || {
            let calls = calls_in.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(42)
            }
        })
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_succeeds_on_third_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in = calls.clone();

        let result: Result<&str, &str> = with_retries(3, Duration::from_millis(1), || {
            let calls = calls_in.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err("not yet")
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausts_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in = calls.clone();

        let result: Result<(), String> = with_retries(3, Duration::from_millis(1), || {
            let calls = calls_in.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Err(format!("failure {}", n))
            }
        })
        .await;

        // The error from the final attempt is returned.
        assert_eq!(result, Err("failure 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_attempts_means_one() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in = calls.clone();

        let result: Result<(), &str> = with_retries(0, Duration::from_millis(1), || {
            let calls = calls_in.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("nope")
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_between_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in = calls.clone();
        let start = tokio::time::Instant::now();

        let result: Result<(), &str> = with_retries(3, Duration::from_secs(2), || {
            let calls = calls_in.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("down")
            }
        })
        .await;

        assert!(result.is_err());
        // Two delays between three attempts; none after the last.
        assert_eq!(start.elapsed(), Duration::from_secs(4));
    }
}
