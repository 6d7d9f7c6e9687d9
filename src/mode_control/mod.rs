//! Decision layer of the altimeter switch: the stateless recommendation engine,
//! the reconciliation state machine that respects manual selections, and the
//! per-vessel flight session tying both to host frames and signals.

mod altitude_mode;
mod config;
mod flight_session;
mod reconciler;
mod recommendation;
mod signal;

pub use altitude_mode::AltitudeMode;
pub use config::{ConfigError, SwitchConfig};
pub use flight_session::{FlightSession, Frame};
pub use reconciler::{OverrideState, Reconciler};
pub use recommendation::{Recommendation, RecommendationEngine};
pub use signal::{ModeCommand, SwitchSignal};
