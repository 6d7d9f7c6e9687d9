use super::altitude_mode::AltitudeMode;
use strum_macros::Display;

/// Edge-triggered notifications from the host.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SwitchSignal {
    /// A vessel was loaded or respawned; all session state starts over.
    FlightStarted,
    Paused,
    Unpaused,
    /// The pilot activated the altimeter mode control.
    ManualToggle,
    /// The displayed mode changed, for whatever reason.
    ModeChanged(AltitudeMode),
}

/// Command to the host to switch the displayed mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ModeCommand {
    pub mode: AltitudeMode,
    /// Diagnostic reason, see [`crate::mode_control::Recommendation`].
    pub justification: String,
}
