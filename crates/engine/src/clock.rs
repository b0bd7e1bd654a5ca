//! Step clock: a fixed-rate ticker that reports elapsed time.
//!
//! Each run of the clock is one tokio task driving a repeating
//! [`tokio::time::Interval`]. Stopping is cooperative: `stop()` clears the
//! run's flag, and the task exits at its next tick without calling back. A
//! callback that is already executing finishes normally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Highest tick rate the clock runs at
pub const MAX_FPS: u32 = 1000;

/// Shortest tick period; matches [`MAX_FPS`]
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Called once per tick with the time since the previous tick
pub type TickCallback = Arc<dyn Fn(Duration) + Send + Sync>;

pub struct StepClock {
    period: Duration,
    handle: Handle,
    callback: TickCallback,
    /// Flag of the current run; `None` while stopped
    run: Option<Arc<AtomicBool>>,
}

impl StepClock {
    /// Clock firing `fps` times per second, clamped to `1..=MAX_FPS`
    pub fn new(
        fps: u32,
        handle: Handle,
        callback: impl Fn(Duration) + Send + Sync + 'static,
    ) -> Self {
        let period = Duration::from_secs_f64(1.0 / fps.clamp(1, MAX_FPS) as f64);
        Self::with_period(period, handle, callback)
    }

    /// Clock with an explicit period, never shorter than [`MIN_PERIOD`]
    pub fn with_period(
        period: Duration,
        handle: Handle,
        callback: impl Fn(Duration) + Send + Sync + 'static,
    ) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            handle,
            callback: Arc::new(callback),
            run: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.run
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    /// Start ticking. The first tick fires one period from now.
    ///
    /// No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let flag = Arc::new(AtomicBool::new(true));
        self.handle.spawn(tick_loop(
            self.period,
            Arc::clone(&flag),
            Arc::clone(&self.callback),
        ));
        self.run = Some(flag);
    }

    /// Stop ticking. No-op if already stopped.
    pub fn stop(&mut self) {
        if let Some(flag) = self.run.take() {
            flag.store(false, Ordering::Release);
        }
    }
}

impl Drop for StepClock {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick_loop(period: Duration, running: Arc<AtomicBool>, callback: TickCallback) {
    let started = Instant::now();
    let mut ticker = time::interval_at(started + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_fired = started;
    loop {
        ticker.tick().await;
        if !running.load(Ordering::Acquire) {
            break;
        }

        let now = Instant::now();
        callback(now - last_fired);
        last_fired = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    fn counting_clock(period_ms: u64) -> (StepClock, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let clock = StepClock::with_period(
            Duration::from_millis(period_ms),
            Handle::current(),
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
        );
        (clock, count)
    }

    #[test]
    fn fps_sets_period() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let clock = StepClock::new(24, rt.handle().clone(), |_| {});
        assert_eq!(clock.period(), Duration::from_secs_f64(1.0 / 24.0));

        let clock = StepClock::new(0, rt.handle().clone(), |_| {});
        assert_eq!(clock.period(), Duration::from_secs(1));
    }

    #[test]
    fn period_never_drops_below_minimum() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let clock = StepClock::new(u32::MAX, rt.handle().clone(), |_| {});
        assert_eq!(clock.period(), MIN_PERIOD);

        let clock = StepClock::with_period(Duration::ZERO, rt.handle().clone(), |_| {});
        assert_eq!(clock.period(), MIN_PERIOD);
    }

    #[tokio::test]
    async fn zero_period_clock_still_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let mut clock = StepClock::with_period(Duration::ZERO, Handle::current(), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        clock.start();
        tokio::time::sleep(Duration::from_millis(50)).await;
        clock.stop();
        assert!(count.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn start_then_immediate_stop_never_fires() {
        let (mut clock, count) = counting_clock(20);
        clock.start();
        clock.stop();
        assert!(!clock.is_running());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn running_clock_fires_repeatedly() {
        let (mut clock, count) = counting_clock(10);
        clock.start();
        assert!(clock.is_running());

        tokio::time::sleep(Duration::from_millis(150)).await;
        clock.stop();
        assert!(count.load(Ordering::SeqCst) >= 3);
    }

    #[tokio::test]
    async fn stop_ends_further_ticks() {
        let (mut clock, count) = counting_clock(10);
        clock.start();
        tokio::time::sleep(Duration::from_millis(60)).await;
        clock.stop();

        // Let an in-flight tick drain, then nothing more may arrive.
        tokio::time::sleep(Duration::from_millis(30)).await;
        let settled = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), settled);
    }

    #[tokio::test]
    async fn start_twice_runs_one_ticker() {
        let (mut clock, count) = counting_clock(20);
        clock.start();
        clock.start();
        tokio::time::sleep(Duration::from_millis(110)).await;
        clock.stop();

        // One ticker fires about 5 times in 110ms; two would fire about 10.
        assert!(count.load(Ordering::SeqCst) <= 7);
    }

    #[tokio::test]
    async fn callback_receives_elapsed_time() {
        let elapsed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&elapsed);
        let mut clock = StepClock::with_period(
            Duration::from_millis(20),
            Handle::current(),
            move |dt| sink.lock().unwrap().push(dt),
        );
        clock.start();
        tokio::time::sleep(Duration::from_millis(90)).await;
        clock.stop();

        let elapsed = elapsed.lock().unwrap();
        assert!(!elapsed.is_empty());
        assert!(elapsed.iter().all(|dt| *dt > Duration::ZERO));
        // Elapsed times chain from tick to tick, so they cannot add up to
        // more than the wall time the clock ran.
        let total: Duration = elapsed.iter().sum();
        assert!(total <= Duration::from_millis(200));
    }
}
