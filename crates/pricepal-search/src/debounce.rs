//! Trailing-edge debouncing of input values.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

/// Quiet period used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Forward a value only once `input` has been quiet for `delay`.
///
/// Each new value replaces the pending one and restarts the timer. When
/// `input` closes, a pending value is still delivered at its deadline, then
/// the returned receiver closes. Runs on a spawned task, so it must be
/// called inside a tokio runtime.
pub fn debounce<T>(mut input: mpsc::UnboundedReceiver<T>, delay: Duration) -> mpsc::UnboundedReceiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut pending: Option<(T, Instant)> = None;

        loop {
            let Some((value, deadline)) = pending.take() else {
                match input.recv().await {
                    Some(value) => pending = Some((value, Instant::now() + delay)),
                    None => break,
                }
                continue;
            };

            tokio::select! {
                next = input.recv() => match next {
                    Some(newer) => pending = Some((newer, Instant::now() + delay)),
                    None => {
                        sleep_until(deadline).await;
                        let _ = tx.send(value);
                        break;
                    }
                },
                _ = sleep_until(deadline) => {
                    if tx.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut out = debounce(rx, Duration::from_millis(300));
        let start = Instant::now();

        for text in ["a", "ab", "abc"] {
            tx.send(text).unwrap();
            sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(out.recv().await, Some("abc"));
        // Last keystroke at 200ms.
        assert_eq!(start.elapsed(), Duration::from_millis(500));

        drop(tx);
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_values_all_pass() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut out = debounce(rx, Duration::from_millis(300));

        tx.send(1).unwrap();
        sleep(Duration::from_millis(400)).await;
        tx.send(2).unwrap();
        drop(tx);

        assert_eq!(out.recv().await, Some(1));
        assert_eq!(out.recv().await, Some(2));
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_value_flushed_after_close() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut out = debounce(rx, DEFAULT_DEBOUNCE);
        let start = Instant::now();

        tx.send("final").unwrap();
        drop(tx);

        assert_eq!(out.recv().await, Some("final"));
        assert!(start.elapsed() >= DEFAULT_DEBOUNCE);
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_emitted_before_quiet_period() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut out = debounce(rx, Duration::from_millis(300));

        tx.send("a").unwrap();
        sleep(Duration::from_millis(299)).await;
        assert!(out.try_recv().is_err());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(out.recv().await, Some("a"));
    }

    #[tokio::test]
    async fn test_closed_input_without_values_closes_output() {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let mut out = debounce(rx, Duration::from_millis(10));
        drop(tx);
        assert_eq!(out.recv().await, None);
    }
}
