use std::future::Future;
use std::time::Duration;

use super::traits::VisionError;

/// One status check of a long-running operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PollState<T> {
    Pending,
    Done(T),
}

/// Calls `check` until it reports [`PollState::Done`] or fails, sleeping
/// `interval` between attempts. Gives up with
/// [`VisionError::RecognitionTimeout`] after `max_attempts` pending checks.
pub async fn poll_until_done<T, F, Fut>(
    interval: Duration,
    max_attempts: u32,
    mut check: F,
) -> Result<T, VisionError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PollState<T>, VisionError>>,
{
    for attempt in 1..=max_attempts {
        match check(attempt).await? {
            PollState::Done(value) => return Ok(value),
            PollState::Pending => {
                log::debug!("Operation still running (poll {}/{})", attempt, max_attempts);
                if attempt < max_attempts {
                    tokio::time::sleep(interval).await;
                }
            }
        }
    }

    Err(VisionError::RecognitionTimeout {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_once_done() {
        let result = poll_until_done(Duration::ZERO, 10, |attempt| async move {
            if attempt < 3 {
                Ok(PollState::Pending)
            } else {
                Ok(PollState::Done(attempt))
            }
        })
        .await
        .unwrap();
        assert_eq!(result, 3);
    }

    #[tokio::test]
    async fn test_times_out() {
        let result: Result<(), _> =
            poll_until_done(Duration::ZERO, 4, |_| async { Ok(PollState::Pending) }).await;
        assert!(matches!(
            result,
            Err(VisionError::RecognitionTimeout { attempts: 4 })
        ));
    }

    #[tokio::test]
    async fn test_failure_stops_polling() {
        let mut calls = 0;
        let result: Result<(), _> = poll_until_done(Duration::ZERO, 10, |_| {
            calls += 1;
            async { Err(VisionError::RecognitionFailed("failed".to_string())) }
        })
        .await;
        assert!(matches!(result, Err(VisionError::RecognitionFailed(_))));
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_between_polls() {
        let start = tokio::time::Instant::now();
        let _ = poll_until_done(Duration::from_secs(1), 3, |attempt| async move {
            Ok(if attempt == 3 {
                PollState::Done(())
            } else {
                PollState::Pending
            })
        })
        .await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
