use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::diagnostics::DiagnosticSink;
use super::errors::RollingTextError;
use super::timer::RepeatingTimer;

/// Warning emitted once when a rolling text is mounted without any texts.
pub const EMPTY_TEXTS_WARNING: &str =
    "RollingText: the \"texts\" input is empty; no text will be displayed";

struct Rotation {
    index: usize,
    mounted: bool,
}

struct RollingState {
    texts: Vec<String>,
    rotation: Mutex<Rotation>,
}

impl RollingState {
    fn rotation(&self) -> MutexGuard<'_, Rotation> {
        self.rotation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn tick(&self) {
        let len = self.texts.len();
        let mut rotation = self.rotation();
        // Checked under the same lock teardown takes, so no tick lands after it returns
        if !rotation.mounted || len == 0 {
            return;
        }
        rotation.index = (rotation.index + 1) % len;
    }
}

/// Text display cycling through a fixed list of strings on a repeating timer.
///
/// The timer handle is owned by the instance and released by [`teardown`](Self::teardown),
/// which also runs on drop. With an empty list nothing is displayed and no timer is started.
pub struct RollingText<T: RepeatingTimer> {
    state: Arc<RollingState>,
    interval: Duration,
    timer: T,
    handle: Option<T::Handle>,
}

impl<T: RepeatingTimer> RollingText<T> {
    /// Mount the display, showing the first text and starting the timer.
    ///
    /// A single text still starts the timer; it simply wraps onto itself.
    pub fn mount<I, S>(
        texts: I,
        interval: Duration,
        timer: T,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, RollingTextError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        let state = Arc::new(RollingState {
            texts,
            rotation: Mutex::new(Rotation {
                index: 0,
                mounted: true,
            }),
        });

        if state.texts.is_empty() {
            sink.warn(EMPTY_TEXTS_WARNING);
            return Ok(Self {
                state,
                interval,
                timer,
                handle: None,
            });
        }

        if interval.is_zero() {
            return Err(RollingTextError::InvalidInterval);
        }

        let ticker = Arc::clone(&state);
        let handle = timer.schedule(interval, Box::new(move || ticker.tick()));
        tracing::debug!(
            "RollingText mounted with {} texts every {:?}",
            state.texts.len(),
            interval
        );

        Ok(Self {
            state,
            interval,
            timer,
            handle: Some(handle),
        })
    }

    /// Text currently displayed, or `None` when there is nothing to display.
    pub fn current(&self) -> Option<&str> {
        self.current_index()
            .and_then(|i| self.state.texts.get(i))
            .map(String::as_str)
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.state.texts.is_empty() {
            None
        } else {
            Some(self.state.rotation().index)
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.state.texts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_mounted(&self) -> bool {
        self.state.rotation().mounted
    }

    /// Whether a timer is currently held by this instance.
    pub fn is_ticking(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the timer. Safe to call repeatedly and on an instance that never started one.
    pub fn teardown(&mut self) {
        self.state.rotation().mounted = false;
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
            tracing::debug!("RollingText timer cancelled");
        }
    }
}

impl<T: RepeatingTimer> Drop for RollingText<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolling_text::timer::{ManualTimer, TickCallback, TokioIntervalTimer};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread::JoinHandle;

    #[derive(Default)]
    struct RecordingSink {
        warnings: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn warnings(&self) -> Vec<String> {
            self.warnings.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }

    const SECOND: Duration = Duration::from_millis(1000);

    fn mount(texts: &[&str], interval: Duration) -> (RollingText<ManualTimer>, ManualTimer) {
        let timer = ManualTimer::new();
        let sink = RecordingSink::default();
        let rolling = RollingText::mount(texts.iter().copied(), interval, timer.clone(), &sink)
            .expect("mount should succeed");
        (rolling, timer)
    }

    #[test]
    fn test_cycles_and_wraps() {
        let (rolling, timer) = mount(&["A", "B", "C"], SECOND);
        assert_eq!(rolling.current(), Some("A"));

        timer.advance(SECOND);
        assert_eq!(rolling.current(), Some("B"));

        timer.advance(SECOND);
        assert_eq!(rolling.current(), Some("C"));

        timer.advance(SECOND);
        assert_eq!(rolling.current(), Some("A"));
        assert_eq!(rolling.current_index(), Some(0));
    }

    #[test]
    fn test_does_not_advance_before_interval() {
        let (rolling, timer) = mount(&["One", "Two", "Three"], Duration::from_millis(5000));

        timer.advance(Duration::from_millis(4999));
        assert_eq!(rolling.current(), Some("One"));

        timer.advance(Duration::from_millis(1));
        assert_eq!(rolling.current(), Some("Two"));
    }

    #[test]
    fn test_two_texts_loop_back() {
        let (rolling, timer) = mount(&["First", "Second"], SECOND);

        timer.advance(SECOND * 2);

        assert_eq!(rolling.current(), Some("First"));
    }

    #[test]
    fn test_empty_texts_warns_once_without_timer() {
        let timer = ManualTimer::new();
        let sink = RecordingSink::default();

        let mut rolling =
            RollingText::mount(Vec::<String>::new(), SECOND, timer.clone(), &sink).unwrap();

        assert_eq!(sink.warnings(), vec![EMPTY_TEXTS_WARNING.to_string()]);
        assert_eq!(timer.active_timers(), 0);
        assert!(!rolling.is_ticking());
        assert_eq!(rolling.current(), None);
        assert_eq!(rolling.current_index(), None);

        timer.advance(SECOND * 10);
        rolling.teardown();
        rolling.teardown();
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn test_empty_texts_accepts_zero_interval() {
        let sink = RecordingSink::default();
        let rolling =
            RollingText::mount(Vec::<String>::new(), Duration::ZERO, ManualTimer::new(), &sink);
        assert!(rolling.is_ok());
    }

    #[test]
    fn test_single_text_still_ticks() {
        let (rolling, timer) = mount(&["Only"], SECOND);
        assert!(rolling.is_ticking());
        assert_eq!(timer.active_timers(), 1);

        for _ in 0..5 {
            timer.advance(SECOND);
            assert_eq!(rolling.current(), Some("Only"));
        }
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let sink = RecordingSink::default();
        let result = RollingText::mount(["A", "B"], Duration::ZERO, ManualTimer::new(), &sink);
        assert_eq!(result.err(), Some(RollingTextError::InvalidInterval));
    }

    #[test]
    fn test_teardown_stops_ticks() {
        let (mut rolling, timer) = mount(&["A", "B", "C"], SECOND);
        timer.advance(SECOND);

        rolling.teardown();
        timer.advance(SECOND * 7);

        assert_eq!(rolling.current(), Some("B"));
        assert!(!rolling.is_mounted());
        assert_eq!(timer.active_timers(), 0);
    }

    #[test]
    fn test_tick_queued_before_teardown_is_ignored() {
        let (mut rolling, timer) = mount(&["A", "B", "C"], SECOND);

        rolling.teardown();
        timer.fire_cancelled();

        assert_eq!(rolling.current(), Some("A"));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (mut rolling, timer) = mount(&["A"], SECOND);
        rolling.teardown();
        rolling.teardown();
        drop(rolling);
        assert_eq!(timer.active_timers(), 0);
    }

    /// Ticks as fast as it can on its own thread. `cancel` only raises a stop
    /// flag and does not wait, like aborting a task mid-callback.
    struct BusyThreadTimer;

    impl RepeatingTimer for BusyThreadTimer {
        type Handle = (Arc<AtomicBool>, JoinHandle<()>);

        fn schedule(&self, _interval: Duration, mut callback: TickCallback) -> Self::Handle {
            let stop = Arc::new(AtomicBool::new(false));
            let stopped = Arc::clone(&stop);
            let thread = std::thread::spawn(move || {
                while !stopped.load(Ordering::Relaxed) {
                    callback();
                }
            });
            (stop, thread)
        }

        fn cancel(&self, handle: Self::Handle) {
            handle.0.store(true, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_no_tick_lands_after_teardown_from_other_thread() {
        let sink = RecordingSink::default();
        let mut changed = 0;
        for _ in 0..200 {
            let mut rolling =
                RollingText::mount(["A", "B", "C", "D"], SECOND, BusyThreadTimer, &sink).unwrap();
            // Let the ticking thread get going
            std::thread::sleep(Duration::from_micros(50));

            rolling.teardown();
            let at_teardown = rolling.current_index();
            std::thread::sleep(Duration::from_micros(200));
            if rolling.current_index() != at_teardown {
                changed += 1;
            }
        }
        assert_eq!(changed, 0);
    }

    #[test]
    fn test_drop_releases_timer() {
        let (rolling, timer) = mount(&["A", "B"], SECOND);
        assert_eq!(timer.active_timers(), 1);

        drop(rolling);

        assert_eq!(timer.active_timers(), 0);
    }

    #[test]
    fn test_repeated_mount_cycles_do_not_leak_timers() {
        let timer = ManualTimer::new();
        let sink = RecordingSink::default();
        let mut released = Vec::new();
        for _ in 0..10 {
            let rolling = RollingText::mount(["A", "B"], SECOND, timer.clone(), &sink).unwrap();
            timer.advance(SECOND);
            assert_eq!(rolling.current(), Some("B"));
            released.push(Arc::downgrade(&rolling.state));
        }
        timer.advance(SECOND);

        assert_eq!(timer.active_timers(), 0);
        assert!(released.iter().all(|state| state.upgrade().is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_driven_rotation() {
        let sink = RecordingSink::default();
        let timer = TokioIntervalTimer::new().unwrap();
        let mut rolling = RollingText::mount(
            [
                "Professional Developer",
                "Engineering Coach",
                "Documentation Nerd",
            ],
            Duration::from_millis(3000),
            timer,
            &sink,
        )
        .unwrap();
        assert_eq!(rolling.current(), Some("Professional Developer"));

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert_eq!(rolling.current(), Some("Engineering Coach"));

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(rolling.current(), Some("Documentation Nerd"));

        rolling.teardown();
        tokio::time::sleep(Duration::from_millis(30_000)).await;
        assert_eq!(rolling.current(), Some("Documentation Nerd"));
    }
}
