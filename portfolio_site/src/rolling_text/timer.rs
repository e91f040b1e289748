use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::errors::RollingTextError;

/// Callback invoked on every timer tick.
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Repeating timer supplied by the host.
///
/// `schedule` must not fire the callback before `interval` has elapsed, and
/// then fires it at every multiple of `interval` until `cancel`.
pub trait RepeatingTimer {
    type Handle;

    fn schedule(&self, interval: Duration, callback: TickCallback) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Timer driven by `tokio::time::interval`, one task per schedule.
#[derive(Debug, Clone)]
pub struct TokioIntervalTimer {
    runtime: tokio::runtime::Handle,
}

impl TokioIntervalTimer {
    /// Bind to the tokio runtime of the calling context.
    pub fn new() -> Result<Self, RollingTextError> {
        tokio::runtime::Handle::try_current()
            .map(Self::with_handle)
            .map_err(|_| RollingTextError::NoRuntime)
    }

    pub fn with_handle(runtime: tokio::runtime::Handle) -> Self {
        Self { runtime }
    }
}

impl RepeatingTimer for TokioIntervalTimer {
    type Handle = tokio::task::JoinHandle<()>;

    fn schedule(&self, interval: Duration, mut callback: TickCallback) -> Self::Handle {
        // Anchor the first tick to schedule time, not to the task's first poll
        let start = tokio::time::Instant::now() + interval;
        self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(start, interval);
            loop {
                ticker.tick().await;
                callback();
            }
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}

/// Handle returned by [`ManualTimer::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualTimerHandle(u64);

struct Scheduled {
    id: u64,
    interval: Duration,
    next_due: Duration,
    callback: TickCallback,
}

#[derive(Default)]
struct ManualTimerState {
    now: Duration,
    next_id: u64,
    entries: Vec<Scheduled>,
    firing: Option<u64>,
    cancelled: Vec<TickCallback>,
}

/// Timer on a virtual clock that only moves when the host calls [`advance`](Self::advance).
///
/// Clones share the same clock. Callbacks whose interval is zero never fire.
#[derive(Clone, Default)]
pub struct ManualTimer {
    inner: Arc<Mutex<ManualTimerState>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualTimerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of schedules that have not been cancelled.
    pub fn active_timers(&self) -> usize {
        let state = self.lock();
        state.entries.len() + usize::from(state.firing.is_some())
    }

    /// Move the clock forward by `by`, firing every callback that falls due, in due order.
    ///
    /// Callbacks cancelled before this call are released; only ticks queued since
    /// the clock last moved can still be replayed with [`fire_cancelled`](Self::fire_cancelled).
    pub fn advance(&self, by: Duration) {
        let target = {
            let mut state = self.lock();
            state.cancelled.clear();
            state.now + by
        };
        loop {
            let mut due = {
                let mut state = self.lock();
                let next = state
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| !s.interval.is_zero() && s.next_due <= target)
                    .min_by_key(|(_, s)| (s.next_due, s.id))
                    .map(|(pos, _)| pos);
                let Some(pos) = next else {
                    state.now = target;
                    break;
                };
                let due = state.entries.swap_remove(pos);
                state.now = due.next_due;
                state.firing = Some(due.id);
                due
            };

            // The lock is released so the callback may cancel timers
            (due.callback)();
            due.next_due += due.interval;

            let mut state = self.lock();
            if state.firing.take() == Some(due.id) {
                state.entries.push(due);
            } else {
                state.cancelled.push(due.callback);
            }
        }
    }

    /// Invoke each callback cancelled since the clock last moved, once, then release it.
    ///
    /// Simulates a host whose tick was already queued when the timer was cancelled.
    pub fn fire_cancelled(&self) {
        let callbacks = std::mem::take(&mut self.lock().cancelled);
        for mut callback in callbacks {
            callback();
        }
    }
}

impl RepeatingTimer for ManualTimer {
    type Handle = ManualTimerHandle;

    fn schedule(&self, interval: Duration, callback: TickCallback) -> Self::Handle {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        let next_due = state.now + interval;
        state.entries.push(Scheduled {
            id,
            interval,
            next_due,
            callback,
        });
        ManualTimerHandle(id)
    }

    fn cancel(&self, handle: Self::Handle) {
        let mut state = self.lock();
        if let Some(pos) = state.entries.iter().position(|s| s.id == handle.0) {
            let cancelled = state.entries.swap_remove(pos);
            state.cancelled.push(cancelled.callback);
        } else if state.firing == Some(handle.0) {
            state.firing = None;
        }
    }
}
