//! Host-facing data model of the active vessel: vector math, body constants,
//! orbit propagation, per-frame telemetry and parachute bookkeeping.

pub(crate) mod body;
pub(crate) mod orbit;
pub(crate) mod parachute;
pub(crate) mod situation;
pub(crate) mod snapshot;
pub(crate) mod vec3d;
#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

pub use body::{Atmosphere, CelestialBody, SphericalBody, TerrainFn};
pub use orbit::{KeplerOrbit, OrbitError, Trajectory};
pub use parachute::{ParachuteCache, ParachuteRef, ParachuteState, PartList, activation_altitude};
pub use situation::Situation;
pub use snapshot::VesselSnapshot;
pub use vec3d::Vec3D;
