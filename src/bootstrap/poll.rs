//! Fixed-interval polling with a deadline

use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Ready,
    TimedOut,
    Cancelled,
}

/// Check `ready` every `every` until it holds, `timeout` passes, or `cancel`
/// fires. The first check happens one interval after the call.
pub async fn poll_until(
    every: Duration,
    timeout: Duration,
    cancel: &CancellationToken,
    mut ready: impl FnMut() -> bool,
) -> PollOutcome {
    let deadline = sleep(timeout);
    tokio::pin!(deadline);
    let mut ticks = interval_at(Instant::now() + every, every);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => return PollOutcome::Cancelled,
            () = &mut deadline => return PollOutcome::TimedOut,
            _ = ticks.tick() => {
                if ready() {
                    return PollOutcome::Ready;
                }
            }
        }
    }
}
