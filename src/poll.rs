//! Bounded retry loop for configuration values that arrive shortly after
//! page load.
//!
//! The sleep is injected so the schedule is testable without a browser
//! event loop, and the token lets the owning component stop the loop on
//! teardown before the next attempt is scheduled.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

pub const SYSTEM_NAME_ATTEMPTS: usize = 5;
pub const SYSTEM_NAME_INTERVAL_MS: u32 = 500;

/// Shared single-threaded cancellation flag.
#[derive(Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Re-read `read` up to `attempts` times, waiting one `sleep` before each
/// attempt, and stop at the first value it yields. Exhaustion and
/// cancellation both resolve to `None`; neither is an error.
pub async fn poll_value<T, R, S, Fut>(
    attempts: usize,
    read: R,
    sleep: S,
    cancel: CancelToken,
) -> Option<T>
where
    R: Fn() -> Option<T>,
    S: Fn() -> Fut,
    Fut: Future<Output = ()>,
{
    for _ in 0..attempts {
        if cancel.is_cancelled() {
            return None;
        }
        sleep().await;
        // Re-check: teardown may have happened while we were waiting.
        if cancel.is_cancelled() {
            return None;
        }
        if let Some(value) = read() {
            return Some(value);
        }
    }
    None
}
