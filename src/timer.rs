//! Cancelable scheduled callbacks on the tokio runtime.
//!
//! Both schedulers must be called from within a tokio runtime. Callbacks are
//! plain synchronous closures; they run on the runtime's worker and must not
//! block.

use std::ops::ControlFlow;

use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Duration, MissedTickBehavior};

/// Handle to a scheduled callback. Dropping the handle detaches the task
/// without cancelling it.
#[derive(Debug)]
pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Stop the task. A callback that is already executing finishes its
    /// current invocation.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Run `callback` once after `delay`. A zero delay still defers the call to
/// the next scheduling point.
pub fn schedule_once<F>(delay: Duration, callback: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        sleep(delay).await;
        callback();
    });
    TaskHandle { handle }
}

/// Run `callback` every `period` until it returns `ControlFlow::Break`. The
/// first call happens one full period after scheduling.
pub fn schedule_every<F>(period: Duration, mut callback: F) -> TaskHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    // interval() panics on a zero period.
    let period = period.max(Duration::from_millis(1));
    let handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await; // First tick completes immediately, skip it
        loop {
            ticker.tick().await;
            if callback().is_break() {
                break;
            }
        }
    });
    TaskHandle { handle }
}
