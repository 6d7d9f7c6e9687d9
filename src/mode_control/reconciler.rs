use super::{
    altitude_mode::AltitudeMode,
    recommendation::Recommendation,
    signal::{ModeCommand, SwitchSignal},
};
use crate::{decision, event, info};
use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, rng};
use strum_macros::Display;

/// Whether a manual choice of the pilot currently overrules the recommendations.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum OverrideState {
    NoOverride,
    /// The pilot picked this mode and the recommendation has not agreed since.
    UserLocked(AltitudeMode),
}

/// Arbitrates between automatic recommendations and manual mode selection.
///
/// Evaluations are rate limited and suppressed for a dwell interval after
/// every mode change, so the display never flickers between modes.
#[derive(Debug, Clone)]
pub struct Reconciler {
    state: OverrideState,
    /// The pilot clicked the control and the resulting mode change is still outstanding.
    pending_manual_click: bool,
    paused: bool,
    next_evaluation: DateTime<Utc>,
    earliest_mode_change: DateTime<Utc>,
}

impl Default for Reconciler {
    fn default() -> Self { Self::new() }
}

impl Reconciler {
    /// Lower bound of the jittered evaluation interval in milliseconds.
    pub const MIN_EVAL_INTERVAL_MS: i64 = 163;
    /// Upper bound of the jittered evaluation interval in milliseconds.
    pub const MAX_EVAL_INTERVAL_MS: i64 = 183;
    /// Minimum time between a mode change and the next automatic one.
    pub const DWELL: TimeDelta = TimeDelta::seconds(1);

    pub fn new() -> Self {
        Self {
            state: OverrideState::NoOverride,
            pending_manual_click: false,
            paused: false,
            next_evaluation: DateTime::<Utc>::MIN_UTC,
            earliest_mode_change: DateTime::<Utc>::MIN_UTC,
        }
    }

    pub fn state(&self) -> OverrideState { self.state }
    pub fn is_paused(&self) -> bool { self.paused }
    pub fn pending_manual_click(&self) -> bool { self.pending_manual_click }

    /// Back to the initial state, as at the start of a flight.
    ///
    /// Pausing belongs to the host simulation, not to the flight, so it is kept.
    pub fn reset(&mut self) { *self = Self { paused: self.paused, ..Self::new() }; }

    /// Applies an inbound host signal.
    pub fn handle(&mut self, signal: SwitchSignal, now: DateTime<Utc>) {
        event!("Reconciler received {signal} in state {}", self.state);
        match signal {
            SwitchSignal::FlightStarted => self.reset(),
            SwitchSignal::Paused => self.paused = true,
            SwitchSignal::Unpaused => self.paused = false,
            SwitchSignal::ManualToggle => self.pending_manual_click = true,
            SwitchSignal::ModeChanged(mode) => {
                self.earliest_mode_change = now + Self::DWELL;
                if self.pending_manual_click {
                    self.pending_manual_click = false;
                    self.state = OverrideState::UserLocked(mode);
                    info!("Pilot selected {mode}, holding it until the recommendation agrees.");
                }
            }
        }
    }

    /// Whether an evaluation may run at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.paused && now >= self.next_evaluation && now >= self.earliest_mode_change
    }

    /// Pushes the next evaluation deadline out by a jittered interval.
    pub fn schedule_next(&mut self, now: DateTime<Utc>) {
        let interval = rng().random_range(Self::MIN_EVAL_INTERVAL_MS..=Self::MAX_EVAL_INTERVAL_MS);
        self.next_evaluation = now + TimeDelta::milliseconds(interval);
    }

    /// Arbitrates a fresh recommendation against the pilot's last manual choice.
    ///
    /// # Arguments
    /// - `now`: Wall-clock time of the current frame.
    /// - `recommended`: Output of the recommendation engine for this frame.
    /// - `displayed`: The mode currently shown.
    ///
    /// # Returns
    /// - `Some(ModeCommand)` if the host should switch modes, `None` otherwise.
    pub fn arbitrate(
        &mut self,
        now: DateTime<Utc>,
        recommended: Recommendation,
        displayed: AltitudeMode,
    ) -> Option<ModeCommand> {
        event!("Recommendation {} while showing {displayed} in state {}", recommended.mode, self.state);
        match self.state {
            OverrideState::NoOverride => {
                if recommended.mode == displayed {
                    return None;
                }
                self.earliest_mode_change = now + Self::DWELL;
                decision!("Switching altimeter to {}: {}", recommended.mode, recommended.justification);
                Some(ModeCommand { mode: recommended.mode, justification: recommended.justification })
            }
            OverrideState::UserLocked(locked) => {
                if recommended.mode == locked {
                    info!("Recommendation caught up with manual {locked}, resuming automatic control.");
                    self.state = OverrideState::NoOverride;
                }
                None
            }
        }
    }
}
