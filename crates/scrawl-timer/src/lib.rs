//! Round timers for Scrawl.
//!
//! Each room owns one [`RoundTimer`]. It arms three kinds of deferred work:
//! a 1 Hz countdown tick, the round expiry, and the short inter-round delay
//! before the next round starts. Firings are delivered as [`TimerEvent`]s
//! into a channel the room actor selects on, so timer work is serialized
//! with every other transition on the room — a tick never races a guess.
//!
//! # Cancellation
//!
//! Cancellation must be race-free: an event that was already queued when
//! the round completed must not fire the "time's up" path. Every armed
//! timer is stamped with an **epoch**; canceling (or re-arming) bumps the
//! epoch, and the actor drops any event whose epoch is stale. Aborting the
//! underlying task is best-effort cleanup on top of that.
//!
//! # Integration
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(cmd) = cmd_rx.recv() => { /* room commands */ }
//!         Some(ev) = timer_rx.recv() => {
//!             if timer.is_current(ev.epoch()) { /* apply */ }
//!         }
//!     }
//! }
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing configuration for one room.
#[derive(Debug, Clone)]
pub struct TimerConfig {
    /// Length of a round.
    pub round_secs: u64,
    /// Pause between a round ending and the next one starting.
    pub inter_round_delay: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            round_secs: 60,
            inter_round_delay: Duration::from_secs(3),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A timer firing, delivered into the room actor's inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed; `seconds_remaining` is what's left.
    Tick {
        seconds_remaining: u64,
        epoch: u64,
    },
    /// The round ran out of time.
    RoundExpired { epoch: u64 },
    /// The inter-round delay elapsed; the next round is due.
    InterRoundElapsed { epoch: u64 },
}

impl TimerEvent {
    /// The epoch this event was armed under.
    pub fn epoch(&self) -> u64 {
        match self {
            Self::Tick { epoch, .. }
            | Self::RoundExpired { epoch }
            | Self::InterRoundElapsed { epoch } => *epoch,
        }
    }
}

/// Channel sender for delivering timer events to a room actor.
pub type TimerSender = mpsc::UnboundedSender<TimerEvent>;

// ---------------------------------------------------------------------------
// RoundTimer
// ---------------------------------------------------------------------------

/// Per-room timer handle. Owns the spawned countdown/delay tasks; dropping
/// it (room destruction) aborts anything still outstanding.
pub struct RoundTimer {
    config: TimerConfig,
    tx: TimerSender,
    /// Bumped on every arm and cancel. Events carry the epoch they were
    /// armed under; anything older is stale.
    epoch: u64,
    countdown: Option<JoinHandle<()>>,
    inter_round: Option<JoinHandle<()>>,
}

impl RoundTimer {
    /// Creates an idle timer that reports into `tx`.
    pub fn new(config: TimerConfig, tx: TimerSender) -> Self {
        Self {
            config,
            tx,
            epoch: 0,
            countdown: None,
            inter_round: None,
        }
    }

    /// Arms the countdown for a fresh round: a tick every second and the
    /// expiry when the clock hits zero. Returns the new epoch.
    ///
    /// Any previously armed countdown or inter-round delay is canceled —
    /// a room runs at most one phase at a time.
    pub fn start_round(&mut self) -> u64 {
        self.cancel_all();
        self.epoch += 1;
        let epoch = self.epoch;
        let secs = self.config.round_secs;
        let tx = self.tx.clone();

        self.countdown = Some(tokio::spawn(async move {
            for elapsed in 1..=secs {
                time::sleep(Duration::from_secs(1)).await;
                let remaining = secs - elapsed;
                let event = if remaining == 0 {
                    TimerEvent::RoundExpired { epoch }
                } else {
                    TimerEvent::Tick {
                        seconds_remaining: remaining,
                        epoch,
                    }
                };
                if tx.send(event).is_err() {
                    return; // room actor is gone
                }
            }
        }));

        debug!(epoch, secs, "round countdown armed");
        epoch
    }

    /// Arms the inter-round delay. Returns the new epoch.
    pub fn schedule_next_round(&mut self) -> u64 {
        self.cancel_all();
        self.epoch += 1;
        let epoch = self.epoch;
        let delay = self.config.inter_round_delay;
        let tx = self.tx.clone();

        self.inter_round = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(TimerEvent::InterRoundElapsed { epoch });
        }));

        debug!(epoch, ?delay, "inter-round delay armed");
        epoch
    }

    /// Cancels anything armed. Safe to call at any time, including after a
    /// task has already fired — the epoch bump makes the queued event
    /// stale.
    pub fn cancel_all(&mut self) {
        self.epoch += 1;
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
        if let Some(handle) = self.inter_round.take() {
            handle.abort();
        }
    }

    /// Whether `epoch` belongs to the currently armed timer. The actor
    /// checks this before acting on any [`TimerEvent`].
    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.epoch
    }

    /// The configured round length in seconds.
    pub fn round_secs(&self) -> u64 {
        self.config.round_secs
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
        if let Some(handle) = self.inter_round.take() {
            handle.abort();
        }
    }
}
