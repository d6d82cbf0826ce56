// Fixed-interval refresh trigger with explicit start/stop.
// Cycles run inline on the caller's task, so a trigger can never start while
// the previous cycle is still waiting on the network; triggers missed during
// a slow cycle are skipped rather than queued. Shutdown is still observed
// while a cycle is in flight.

use std::future::Future;

use tokio::sync::oneshot;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};
use tracing::debug;

/// Work driven by the scheduler.
pub trait RefreshTask {
    fn refresh(&mut self) -> impl Future<Output = ()>;
}

pub struct RefreshScheduler {
    period: Duration,
    ticker: Option<Interval>,
}

impl RefreshScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            ticker: None,
        }
    }

    pub fn from_millis(interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(interval_ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Arm the timer. The first trigger fires immediately. Must be called
    /// inside a Tokio runtime.
    pub fn start(&mut self) {
        let mut tick = interval(self.period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ticker = Some(tick);
        debug!(period_ms = self.period.as_millis() as u64, "refresh scheduler started");
    }

    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("refresh scheduler stopped");
        }
    }

    /// Make the next trigger fire now; later ones follow at `period`.
    pub fn request_now(&mut self) {
        if let Some(tick) = self.ticker.as_mut() {
            tick.reset_immediately();
        }
    }

    /// Wait for the next trigger. Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.ticker.as_mut() {
            Some(tick) => {
                tick.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Run `task` now and then every period until `shutdown` fires. A cycle
    /// still in flight when it fires is dropped.
    pub async fn run<T: RefreshTask>(mut self, task: &mut T, mut shutdown: oneshot::Receiver<()>) {
        self.start();
        loop {
            tokio::select! {
                _ = self.tick() => {
                    tokio::select! {
                        _ = task.refresh() => {}
                        _ = &mut shutdown => {
                            debug!("refresh scheduler shutting down; cycle abandoned");
                            break;
                        }
                    }
                }
                _ = &mut shutdown => {
                    debug!("refresh scheduler shutting down");
                    break;
                }
            }
        }
        self.stop();
    }
}
