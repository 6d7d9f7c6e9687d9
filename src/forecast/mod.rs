//! Near-term terrain collision forecasting: radial kinematics at arbitrary
//! instants, closed-form free-fall impact times and forward path sampling.

pub(crate) mod impact;
pub(crate) mod kinematics;
pub(crate) mod projection;

pub use impact::time_to_impact;
pub use kinematics::{KinematicSample, sample, surface_altitude};
pub use projection::{ImpactProjection, PathProjector};
