//! Deterministic tests for the round timer.
//!
//! Uses `tokio::time::pause()` (via `start_paused`) so sleeps resolve
//! instantly when the runtime advances the clock — no wall-clock waits.

use std::time::Duration;

use scrawl_timer::{RoundTimer, TimerConfig, TimerEvent};
use tokio::sync::mpsc;

fn short_config() -> TimerConfig {
    TimerConfig {
        round_secs: 3,
        inter_round_delay: Duration::from_secs(3),
    }
}

/// Drains everything currently queued on the channel.
fn drain(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
    let mut events = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        events.push(ev);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn test_countdown_ticks_then_expires() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    let epoch = timer.start_round();

    tokio::time::sleep(Duration::from_millis(3_100)).await;

    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![
            TimerEvent::Tick { seconds_remaining: 2, epoch },
            TimerEvent::Tick { seconds_remaining: 1, epoch },
            TimerEvent::RoundExpired { epoch },
        ]
    );
    assert!(timer.is_current(epoch));
}

#[tokio::test(start_paused = true)]
async fn test_no_events_after_expiry() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    timer.start_round();

    tokio::time::sleep(Duration::from_secs(10)).await;

    let events = drain(&mut rx);
    assert_eq!(events.len(), 3, "2 ticks + 1 expiry, then silence");
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_the_countdown() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    let epoch = timer.start_round();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    timer.cancel_all();
    tokio::time::sleep(Duration::from_secs(10)).await;

    let events = drain(&mut rx);
    // Only the tick that fired before cancellation; no expiry.
    assert_eq!(
        events,
        vec![TimerEvent::Tick { seconds_remaining: 2, epoch }]
    );
    assert!(
        !timer.is_current(epoch),
        "cancel bumps the epoch so even a queued event reads as stale"
    );
}

#[tokio::test(start_paused = true)]
async fn test_queued_event_is_stale_after_cancel() {
    // Race shape: the tick fires (lands in the channel) and THEN the
    // round completes. The consumer must be able to reject it.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    let epoch = timer.start_round();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    // Event is in the channel now; cancel before draining.
    timer.cancel_all();

    for ev in drain(&mut rx) {
        assert_eq!(ev.epoch(), epoch);
        assert!(!timer.is_current(ev.epoch()));
    }
}

#[tokio::test(start_paused = true)]
async fn test_inter_round_delay_fires_once() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    let epoch = timer.schedule_next_round();

    tokio::time::sleep(Duration::from_millis(2_900)).await;
    assert!(drain(&mut rx).is_empty(), "nothing before the delay elapses");

    tokio::time::sleep(Duration::from_millis(200)).await;
    let events = drain(&mut rx);
    assert_eq!(events, vec![TimerEvent::InterRoundElapsed { epoch }]);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(drain(&mut rx).is_empty(), "one-shot: fires exactly once");
}

#[tokio::test(start_paused = true)]
async fn test_rearming_invalidates_previous_epoch() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    let first = timer.start_round();
    let second = timer.start_round();

    assert_ne!(first, second);
    assert!(!timer.is_current(first));
    assert!(timer.is_current(second));

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    for ev in drain(&mut rx) {
        assert_eq!(ev.epoch(), second, "old countdown was aborted");
    }
}

#[tokio::test(start_paused = true)]
async fn test_completion_path_replaces_countdown_with_delay() {
    // A completing guess cancels the countdown and arms the inter-round
    // delay in one motion; no expiry may fire afterwards.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    timer.start_round();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    let _ = drain(&mut rx);

    let delay_epoch = timer.schedule_next_round();
    tokio::time::sleep(Duration::from_secs(10)).await;

    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![TimerEvent::InterRoundElapsed { epoch: delay_epoch }],
        "no RoundExpired after the completion path took over"
    );
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_outstanding_timers() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(short_config(), tx);
    timer.start_round();
    drop(timer);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(drain(&mut rx).is_empty(), "dropped timer emits nothing");
}

#[tokio::test(start_paused = true)]
async fn test_default_config_counts_down_from_sixty() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RoundTimer::new(TimerConfig::default(), tx);
    assert_eq!(timer.round_secs(), 60);
    let epoch = timer.start_round();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![TimerEvent::Tick { seconds_remaining: 59, epoch }]
    );
}
