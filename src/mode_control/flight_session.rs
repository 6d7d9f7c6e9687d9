use super::{
    altitude_mode::AltitudeMode,
    config::SwitchConfig,
    reconciler::{OverrideState, Reconciler},
    recommendation::RecommendationEngine,
    signal::{ModeCommand, SwitchSignal},
};
use crate::vessel::{ParachuteCache, PartList, VesselSnapshot};
use chrono::{DateTime, Utc};

/// Everything the host knows about the active vessel in one frame.
pub struct Frame<'a> {
    pub vessel: VesselSnapshot<'a>,
    pub parts: &'a dyn PartList,
    /// The mode the altimeter currently shows.
    pub displayed: AltitudeMode,
}

/// Per-vessel decision loop, driven once per simulation frame.
#[derive(Debug, Default)]
pub struct FlightSession {
    reconciler: Reconciler,
    chute_cache: ParachuteCache,
}

impl FlightSession {
    pub fn new() -> Self { Self::default() }

    pub fn override_state(&self) -> OverrideState { self.reconciler.state() }
    pub fn reconciler(&self) -> &Reconciler { &self.reconciler }
    pub fn chute_cache(&self) -> &ParachuteCache { &self.chute_cache }

    /// Forwards a host notification.
    pub fn on_signal(&mut self, signal: SwitchSignal, now: DateTime<Utc>) {
        if signal == SwitchSignal::FlightStarted {
            self.chute_cache.invalidate();
        }
        self.reconciler.handle(signal, now);
    }

    /// Runs one frame of the decision loop.
    ///
    /// The frame is skipped without any state change if the mod is disabled,
    /// no vessel is active, the simulation is paused, the evaluation interval
    /// has not elapsed or the dwell interval after the last mode change is
    /// still running.
    ///
    /// # Returns
    /// - `Some(ModeCommand)` if the host should switch the altimeter.
    pub fn on_frame(
        &mut self,
        now: DateTime<Utc>,
        frame: Option<&Frame<'_>>,
        config: &SwitchConfig,
    ) -> Option<ModeCommand> {
        if !config.enabled {
            return None;
        }
        let frame = frame?;
        if !self.reconciler.is_due(now) {
            return None;
        }
        self.reconciler.schedule_next(now);

        let parachutes = self.chute_cache.parachutes(frame.parts);
        let recommended = RecommendationEngine::recommend(&frame.vessel, &parachutes, config, frame.displayed);
        self.reconciler.arbitrate(now, recommended, frame.displayed)
    }
}
