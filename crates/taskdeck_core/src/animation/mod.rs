//! Time-driven interpolation for counters, progress bars and chart reveals.
//!
//! # Responsibility
//! - Map elapsed time on an injected clock to intermediate display values.
//! - Stop emitting immediately once a consumer cancels.
//!
//! # Invariants
//! - Progress is `clamp((now - start) / duration, 0, 1)`.
//! - Counter readouts are floored; continuous readouts are not rounded.
//! - The target is emitted exactly once elapsed time reaches the duration.
//! - Per interpolator, accepted ticks have strictly increasing time.

mod clock;
mod driver;
mod interpolator;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::AnimationDriver;
pub use interpolator::{CancellationToken, Interpolator, Readout};
