//! Settle a batch of fallible futures and partition the outcomes.

use std::future::Future;

use futures::future;

/// Outcomes of a settled batch, partitioned into successes and failures.
///
/// Each side preserves the relative order in which its futures were
/// submitted.
#[derive(Debug)]
pub struct Settled<T, E> {
    /// Values from futures that resolved `Ok`, in submission order.
    pub successes: Vec<T>,
    /// Errors from futures that resolved `Err`, in submission order.
    pub failures: Vec<E>,
}

/// Drive a batch of fallible futures concurrently and wait for every one
/// to settle.
///
/// All futures are polled on the current task; no failure aborts or
/// otherwise affects its siblings. An empty batch settles immediately
/// into empty partitions.
pub async fn settle_all<I, T, E>(futures: I) -> Settled<T, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    let results = future::join_all(futures).await;

    let mut settled = Settled {
        successes: Vec::with_capacity(results.len()),
        failures: Vec::new(),
    };
    for result in results {
        match result {
            Ok(value) => settled.successes.push(value),
            Err(err) => settled.failures.push(err),
        }
    }
    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn outcome(value: u32, ok: bool) -> Result<u32, String> {
        if ok {
            Ok(value)
        } else {
            Err(format!("failed: {value}"))
        }
    }

    #[tokio::test]
    async fn partitions_preserving_submission_order() {
        let settled = settle_all(vec![
            outcome(1, true),
            outcome(2, false),
            outcome(3, true),
            outcome(4, false),
        ])
        .await;

        assert_eq!(settled.successes, vec![1, 3]);
        assert_eq!(
            settled.failures,
            vec!["failed: 2".to_string(), "failed: 4".to_string()]
        );
    }

    #[tokio::test]
    async fn all_failures_yield_empty_successes() {
        let settled = settle_all(vec![outcome(1, false), outcome(2, false)]).await;
        assert!(settled.successes.is_empty());
        assert_eq!(settled.failures.len(), 2);
    }

    #[tokio::test]
    async fn empty_batch_settles_immediately() {
        let futures: Vec<future::Ready<Result<u32, String>>> = Vec::new();
        let settled = settle_all(futures).await;
        assert!(settled.successes.is_empty());
        assert!(settled.failures.is_empty());
    }
}
