use crate::config::DashboardConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a raw interpolated value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    /// Whole units only; values are floored.
    Counter,
    /// Unrounded, for widths and arc sweeps.
    Continuous,
}

/// Shared stop flag between an interpolator and the view that owns it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Linear ramp from `from` to `target` over `duration_ms`.
#[derive(Debug, Clone)]
pub struct Interpolator {
    from: f64,
    target: f64,
    duration_ms: u64,
    started_at_ms: u64,
    readout: Readout,
    last_tick_ms: Option<u64>,
    token: CancellationToken,
}

impl Interpolator {
    /// Starts a ramp from zero at `now_ms`.
    pub fn new(target: f64, duration_ms: u64, readout: Readout, now_ms: u64) -> Self {
        Self::starting_at(0.0, target, duration_ms, readout, now_ms)
    }

    pub fn starting_at(
        from: f64,
        target: f64,
        duration_ms: u64,
        readout: Readout,
        now_ms: u64,
    ) -> Self {
        Self {
            from,
            target,
            duration_ms,
            started_at_ms: now_ms,
            readout,
            last_tick_ms: None,
            token: CancellationToken::new(),
        }
    }

    /// Integer counter ramp, e.g. stat-card totals.
    pub fn counter(target: u64, duration_ms: u64, now_ms: u64) -> Self {
        Self::new(target as f64, duration_ms, Readout::Counter, now_ms)
    }

    /// Width ramp for a progress bar, `percent` in `0..=100`.
    pub fn progress_bar(percent: f64, duration_ms: u64, now_ms: u64) -> Self {
        Self::new(percent, duration_ms, Readout::Continuous, now_ms)
    }

    /// Counter ramp using the configured stat-card duration.
    pub fn counter_for(config: &DashboardConfig, target: u64, now_ms: u64) -> Self {
        Self::counter(target, config.counter_duration_ms, now_ms)
    }

    /// Progress bar ramp using the configured reveal duration.
    pub fn progress_bar_for(config: &DashboardConfig, percent: f64, now_ms: u64) -> Self {
        Self::progress_bar(percent, config.progress_duration_ms, now_ms)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    /// Handle the owning view keeps to stop emission on teardown.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Fraction of the ramp completed at `now_ms`, in `[0, 1]`.
    pub fn progress_at(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Displayed value at `now_ms`, without touching tick state.
    pub fn value_at(&self, now_ms: u64) -> f64 {
        let raw = self.raw_at(now_ms);
        match self.readout {
            Readout::Counter => raw.floor(),
            Readout::Continuous => raw,
        }
    }

    /// Accepts one frame tick and returns the value to display.
    ///
    /// Returns `None` when cancelled or when `now_ms` does not advance past
    /// the previous accepted tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if self.is_cancelled() {
            return None;
        }
        if self.last_tick_ms.is_some_and(|last| now_ms <= last) {
            return None;
        }
        self.last_tick_ms = Some(now_ms);
        Some(self.value_at(now_ms))
    }

    /// True once a tick at or past the full duration has been accepted.
    pub fn is_finished(&self) -> bool {
        self.last_tick_ms
            .is_some_and(|last| self.progress_at(last) >= 1.0)
    }

    /// Restarts toward `target` from the value shown at `now_ms`.
    pub fn retarget(&mut self, target: f64, now_ms: u64) {
        self.from = self.raw_at(now_ms);
        self.target = target;
        self.started_at_ms = now_ms;
    }

    fn raw_at(&self, now_ms: u64) -> f64 {
        let progress = self.progress_at(now_ms);
        if progress >= 1.0 {
            return self.target;
        }
        self.from + progress * (self.target - self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::{Interpolator, Readout};
    use crate::config::DashboardConfig;

    #[test]
    fn counter_floors_and_progress_bar_does_not() {
        let counter = Interpolator::counter(10, 1000, 0);
        let bar = Interpolator::progress_bar(10.0, 1000, 0);
        assert_eq!(counter.value_at(250), 2.0);
        assert_eq!(bar.value_at(250), 2.5);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut ramp = Interpolator::new(42.0, 0, Readout::Counter, 5);
        assert_eq!(ramp.tick(5), Some(42.0));
        assert!(ramp.is_finished());
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let mut ramp = Interpolator::progress_bar(100.0, 100, 0);
        assert_eq!(ramp.tick(50), Some(50.0));
        assert_eq!(ramp.tick(50), None);
        assert_eq!(ramp.tick(40), None);
        assert_eq!(ramp.tick(60), Some(60.0));
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut ramp = Interpolator::progress_bar(100.0, 100, 0);
        ramp.retarget(20.0, 50);
        assert_eq!(ramp.value_at(50), 50.0);
        assert_eq!(ramp.value_at(100), 35.0);
        assert_eq!(ramp.value_at(150), 20.0);
    }

    #[test]
    fn cancel_stops_emission() {
        let mut ramp = Interpolator::counter(3, 30, 0);
        let token = ramp.token();
        assert!(ramp.tick(10).is_some());
        token.cancel();
        assert_eq!(ramp.tick(20), None);
        assert!(ramp.is_cancelled());
    }

    #[test]
    fn configured_ramps_use_configured_durations() {
        let config = DashboardConfig {
            counter_duration_ms: 400,
            progress_duration_ms: 1_000,
            ..DashboardConfig::default()
        };
        let counter = Interpolator::counter_for(&config, 8, 0);
        let bar = Interpolator::progress_bar_for(&config, 60.0, 0);
        assert_eq!(counter.readout(), Readout::Counter);
        assert_eq!(counter.value_at(100), 2.0);
        assert_eq!(counter.value_at(400), 8.0);
        assert_eq!(bar.readout(), Readout::Continuous);
        assert_eq!(bar.value_at(500), 30.0);
        assert_eq!(bar.value_at(1_000), 60.0);
    }
}
