use std::{
    future::Future,
    time::{Duration, Instant},
};

use tracing::debug;

/// Runs `operation` and returns its result together with the elapsed time.
pub fn timed<T, F>(name: &'static str, operation: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = operation();
    let elapsed = start.elapsed();
    debug!(operation = name, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "operation finished");
    (result, elapsed)
}

pub async fn timed_async<T, Fut>(name: &'static str, operation: Fut) -> (T, Duration)
where
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    let result = operation.await;
    let elapsed = start.elapsed();
    debug!(operation = name, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "operation finished");
    (result, elapsed)
}
