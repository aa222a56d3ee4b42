//! CLI smoke entry point.
//!
//! Prints the core version and a dashboard summary computed from the seed
//! dataset, so the derivation wiring can be checked without a UI.

use chrono::Local;
use std::thread;
use std::time::Duration;
use taskdeck_core::derive::{
    completion_rate, partition_by_priority, partition_by_status, projects_by_status, task_stats,
    unread_count, upcoming_deadlines,
};
use taskdeck_core::{
    init_logging_from_config, seed, AnimationDriver, Category, Clock, DashboardConfig,
    Interpolator, MemoryStore, Preferences, SystemClock,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    let config = DashboardConfig::default();
    let log_dir = std::env::temp_dir().join("taskdeck-cli-logs");
    if let Err(err) = init_logging_from_config(&config, &log_dir.to_string_lossy()) {
        eprintln!("taskdeck_cli logging disabled: {err}");
    }

    let workspace = seed::workspace();
    let tasks = workspace.tasks();
    let projects = workspace.projects();
    let now = Local::now();

    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let stats = task_stats(&tasks, &now);
    println!(
        "tasks total={} completed={} in_progress={} overdue={} completion_rate={:.2}",
        stats.total,
        stats.completed,
        stats.in_progress,
        stats.overdue,
        completion_rate(&tasks)
    );

    for (status, count) in partition_by_status(&tasks).counts() {
        println!("tasks status={} count={}", status.as_str(), count);
    }
    for (priority, count) in partition_by_priority(&tasks).chart_slices() {
        println!("tasks priority={} count={}", priority.as_str(), count);
    }
    for (status, count) in projects_by_status(&projects).counts() {
        println!("projects status={} count={}", status.as_str(), count);
    }

    let upcoming = upcoming_deadlines(&tasks, &now, config.upcoming_window_days);
    println!(
        "upcoming window_days={} count={}",
        config.upcoming_window_days,
        upcoming.len()
    );

    let mut prefs = Preferences::new(MemoryStore::new(), seed::notifications());
    let unread = unread_count(&prefs.notifications());
    let dark_mode = prefs.dark_mode();
    println!("notifications unread={unread} dark_mode={dark_mode}");

    let clock = SystemClock::new();
    let mut driver = AnimationDriver::new();
    driver.subscribe(
        Interpolator::counter_for(&config, stats.total as u64, clock.now_ms()),
        |value| print!("\rtasks counter={value}"),
    );
    let mut frames = 0;
    while !driver.is_idle() {
        thread::sleep(FRAME_INTERVAL);
        driver.frame(&clock);
        frames += 1;
    }
    println!("\nanimation frames={frames}");
}
