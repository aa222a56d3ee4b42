use std::cell::RefCell;
use std::rc::Rc;
use taskdeck_core::{
    AnimationDriver, Clock, DashboardConfig, Interpolator, ManualClock, Readout, SystemClock,
};

fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    (values, move |value| sink.borrow_mut().push(value))
}

#[test]
fn counter_sequence_is_non_decreasing_whole_and_ends_on_target() {
    let clock = ManualClock::new(1_000);
    let mut driver = AnimationDriver::new();
    let (emitted, sink) = recorder();
    driver.subscribe(Interpolator::counter(37, 2_000, clock.now_ms()), sink);

    while !driver.is_idle() {
        clock.advance(16);
        driver.frame(&clock);
    }

    let emitted = emitted.borrow();
    assert!(emitted.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(emitted.iter().all(|value| value.fract() == 0.0));
    assert_eq!(emitted.last().copied(), Some(37.0));
}

#[test]
fn progress_bar_emits_fractional_widths() {
    let clock = ManualClock::new(0);
    let mut driver = AnimationDriver::new();
    let (emitted, sink) = recorder();
    driver.subscribe(Interpolator::progress_bar(75.0, 1_000, clock.now_ms()), sink);

    clock.advance(333);
    assert_eq!(driver.frame(&clock), 1);
    clock.advance(10_000);
    assert_eq!(driver.frame(&clock), 1);

    let emitted = emitted.borrow();
    assert!(emitted[0].fract() != 0.0);
    assert!((emitted[0] - 24.975).abs() < 1e-9);
    assert_eq!(emitted[1], 75.0);
    assert!(driver.is_idle());
}

#[test]
fn repeated_frame_at_same_reading_emits_nothing() {
    let clock = ManualClock::new(0);
    let mut driver = AnimationDriver::new();
    let (emitted, sink) = recorder();
    driver.subscribe(Interpolator::progress_bar(100.0, 100, 0), sink);

    clock.set(50);
    assert_eq!(driver.frame(&clock), 1);
    assert_eq!(driver.frame(&clock), 0);
    clock.set(40);
    assert_eq!(driver.frame(&clock), 0);
    assert_eq!(*emitted.borrow(), vec![50.0]);
}

#[test]
fn driver_stops_cancelled_subscription_even_with_pending_frames() {
    let clock = ManualClock::new(0);
    let mut driver = AnimationDriver::new();
    let (kept, kept_sink) = recorder();
    let (dropped, dropped_sink) = recorder();

    driver.subscribe(Interpolator::counter(10, 100, 0), kept_sink);
    let token = driver.subscribe(
        Interpolator::new(10.0, 100, Readout::Continuous, 0),
        dropped_sink,
    );

    clock.advance(25);
    assert_eq!(driver.frame(&clock), 2);
    token.cancel();
    clock.advance(25);
    assert_eq!(driver.frame(&clock), 1);
    clock.advance(100);
    assert_eq!(driver.frame(&clock), 1);

    assert_eq!(*dropped.borrow(), vec![2.5]);
    assert_eq!(*kept.borrow(), vec![2.0, 5.0, 10.0]);
    assert!(driver.is_idle());
    clock.advance(16);
    assert_eq!(driver.frame(&clock), 0);
}

#[test]
fn configured_counter_finishes_after_configured_duration() {
    let config = DashboardConfig {
        counter_duration_ms: 300,
        ..DashboardConfig::default()
    };
    let clock = ManualClock::new(0);
    let mut driver = AnimationDriver::new();
    let (emitted, sink) = recorder();
    driver.subscribe(Interpolator::counter_for(&config, 24, clock.now_ms()), sink);

    clock.advance(150);
    driver.frame(&clock);
    assert!(!driver.is_idle());
    clock.advance(150);
    driver.frame(&clock);
    assert!(driver.is_idle());
    assert_eq!(*emitted.borrow(), vec![12.0, 24.0]);
}

#[test]
fn system_clock_drives_zero_duration_ramp_in_one_frame() {
    let clock = SystemClock::new();
    let mut driver = AnimationDriver::new();
    let (emitted, sink) = recorder();
    driver.subscribe(Interpolator::counter(5, 0, clock.now_ms()), sink);

    assert_eq!(driver.frame(&clock), 1);
    assert!(driver.is_idle());
    assert_eq!(*emitted.borrow(), vec![5.0]);
}

#[test]
fn retarget_mid_flight_reaches_new_target() {
    let clock = ManualClock::new(0);
    let mut bar = Interpolator::progress_bar(40.0, 400, clock.now_ms());
    clock.advance(200);
    assert_eq!(bar.tick(clock.now_ms()), Some(20.0));

    bar.retarget(80.0, clock.now_ms());
    clock.advance(200);
    assert_eq!(bar.tick(clock.now_ms()), Some(50.0));
    clock.advance(200);
    assert_eq!(bar.tick(clock.now_ms()), Some(80.0));
    assert!(bar.is_finished());
}
