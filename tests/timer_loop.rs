// tests/timer_loop.rs
//
// Timer-loop behaviour under paused tokio time. The fake child sleeps on the
// tokio clock, so every run is deterministic up to the timer's millisecond
// granularity.

mod common;
use crate::common::{TestResult, init_tracing};

use std::time::Duration;

use cmdtimer::engine::{Coordinator, RunOutcome};
use cmdtimer::timer::TimerOptions;
use cmdtimer::types::ChildStatus;
use cmdtimer_test_utils::fake_process::FakeProcess;
use cmdtimer_test_utils::recording::{RecordingRenderer, RenderEvent};

const SLACK: Duration = Duration::from_millis(20);

fn options(delay_ms: u64, interval_ms: u64) -> TimerOptions {
    TimerOptions {
        delay: Duration::from_millis(delay_ms),
        interval: Duration::from_millis(interval_ms),
    }
}

async fn run_fake(
    runtime_ms: u64,
    options: TimerOptions,
) -> Result<(RunOutcome, Vec<RenderEvent>), Box<dyn std::error::Error>> {
    init_tracing();
    let renderer = RecordingRenderer::new();
    let events = renderer.events();
    let backend = FakeProcess::finishing_after(
        Duration::from_millis(runtime_ms),
        ChildStatus::Exited(0),
    );

    let outcome = Coordinator::new(backend, options)
        .run(Box::new(renderer))
        .await?;
    let events = events.lock().unwrap().clone();
    Ok((outcome, events))
}

fn ticks(events: &[RenderEvent]) -> Vec<cmdtimer::timer::RunState> {
    events
        .iter()
        .filter_map(|e| match e {
            RenderEvent::Tick(s) => Some(*s),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_no_delay_starts_with_standard_render() -> TestResult {
    let (outcome, events) = run_fake(1100, options(0, 250)).await?;

    assert_eq!(events.first(), Some(&RenderEvent::Begin));
    match events.get(1) {
        Some(RenderEvent::Tick(state)) => assert!(state.elapsed < SLACK),
        other => panic!("expected a standard tick first, got {other:?}"),
    }
    assert!(!events.iter().any(|e| matches!(e, RenderEvent::Initial(_))));

    // Ticks at 0, .25, .5, .75 and 1.0 seconds.
    assert_eq!(ticks(&events).len(), 5);
    assert_eq!(outcome.exit_code(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_final_render_follows_exit_within_one_interval() -> TestResult {
    let (outcome, events) = run_fake(1100, options(0, 250)).await?;

    let last = events.last().expect("at least one event");
    let RenderEvent::Finish(state) = last else {
        panic!("expected the final render last, got {last:?}");
    };
    assert_eq!(state.status, Some(ChildStatus::Exited(0)));
    assert!(state.elapsed >= Duration::from_millis(1100));
    assert!(state.elapsed < Duration::from_millis(1100) + Duration::from_millis(250));

    let finishes = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::Finish(_)))
        .count();
    assert_eq!(finishes, 1);
    assert_eq!(outcome.timer.map(|s| s.status), Some(Some(ChildStatus::Exited(0))));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_tick_changed_tracks_whole_seconds() -> TestResult {
    let (_, events) = run_fake(2600, options(0, 250)).await?;
    let ticks = ticks(&events);
    assert!(ticks.len() >= 10);

    let mut previous = 0;
    for state in &ticks {
        let whole = state.whole_secs();
        assert_eq!(
            state.tick_changed,
            whole != previous,
            "tick at {:?} (previous whole second {previous})",
            state.elapsed
        );
        previous = whole;
    }

    let changed = ticks.iter().filter(|s| s.tick_changed).count();
    assert_eq!(changed, 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_renders_initial_once_before_standard() -> TestResult {
    let (_, events) = run_fake(2000, options(1000, 250)).await?;

    assert_eq!(events.first(), Some(&RenderEvent::Begin));
    assert!(matches!(events.get(1), Some(RenderEvent::Initial(_))));

    let initials = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::Initial(_)))
        .count();
    assert_eq!(initials, 1);

    let ticks = ticks(&events);
    let first_tick = ticks.first().expect("standard renders after the delay");
    assert!(first_tick.elapsed >= Duration::from_millis(1000));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_child_finishing_during_delay_goes_straight_to_final() -> TestResult {
    let (outcome, events) = run_fake(500, options(3000, 250)).await?;

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], RenderEvent::Begin));
    assert!(matches!(events[1], RenderEvent::Initial(_)));
    match &events[2] {
        RenderEvent::Finish(state) => {
            assert!(state.elapsed >= Duration::from_millis(500));
            assert!(state.elapsed < Duration::from_millis(500) + SLACK);
        }
        other => panic!("expected final render, got {other:?}"),
    }
    assert_eq!(outcome.exit_code(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_instant_exit_still_renders_once_and_finishes() -> TestResult {
    let (_, events) = run_fake(0, options(0, 250)).await?;

    assert_eq!(events.first(), Some(&RenderEvent::Begin));
    assert!(matches!(events.last(), Some(RenderEvent::Finish(_))));
    assert!(ticks(&events).len() <= 1);
    Ok(())
}
