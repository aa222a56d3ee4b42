use super::clock::Clock;
use super::interpolator::{CancellationToken, Interpolator};
use log::debug;

struct Subscription {
    interpolator: Interpolator,
    on_value: Box<dyn FnMut(f64)>,
}

/// Frame loop that feeds many interpolators from one tick source.
///
/// Each subscription only observes its own ticks; no ordering holds between
/// different subscriptions within a frame.
#[derive(Default)]
pub struct AnimationDriver {
    subscriptions: Vec<Subscription>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `interpolator` and returns the token that stops it.
    pub fn subscribe(
        &mut self,
        interpolator: Interpolator,
        on_value: impl FnMut(f64) + 'static,
    ) -> CancellationToken {
        let token = interpolator.token();
        self.subscriptions.push(Subscription {
            interpolator,
            on_value: Box::new(on_value),
        });
        token
    }

    /// Number of subscriptions still waiting for frames.
    pub fn active_len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_idle(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Delivers one frame at the current reading of `clock`.
    pub fn frame(&mut self, clock: &impl Clock) -> usize {
        self.tick(clock.now_ms())
    }

    /// Delivers one frame at `now_ms` and returns how many values were emitted.
    ///
    /// Cancelled and finished subscriptions are dropped after this frame.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut emitted = 0;
        self.subscriptions.retain_mut(|subscription| {
            if subscription.interpolator.is_cancelled() {
                return false;
            }
            if let Some(value) = subscription.interpolator.tick(now_ms) {
                (subscription.on_value)(value);
                emitted += 1;
            }
            !subscription.interpolator.is_finished()
        });
        if emitted > 0 {
            debug!(
                "event=animation_frame module=animation status=ok now_ms={} emitted={} active={}",
                now_ms,
                emitted,
                self.subscriptions.len()
            );
        }
        emitted
    }
}
