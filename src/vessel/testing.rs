//! Fixtures standing in for host-side collaborators in unit tests.

use super::{CelestialBody, ParachuteRef, PartList, Situation, SphericalBody, Trajectory, Vec3D, VesselSnapshot};
use std::cell::Cell;

/// Straight-line motion, ignoring gravity.
pub(crate) struct LinearTrajectory {
    pub pos: Vec3D<f64>,
    pub vel: Vec3D<f64>,
    pub epoch: f64,
    pub periapsis: f64,
}

impl LinearTrajectory {
    pub fn new(pos: Vec3D<f64>, vel: Vec3D<f64>) -> Self { Self { pos, vel, epoch: 0.0, periapsis: 0.0 } }
}

impl Trajectory for LinearTrajectory {
    fn relative_position_at(&self, ut: f64) -> Vec3D<f64> { self.pos + self.vel * (ut - self.epoch) }
    fn velocity_at(&self, _ut: f64) -> Vec3D<f64> { self.vel }
    fn periapsis_radius(&self) -> f64 { self.periapsis }
}

/// Parts list that counts how often parachute modules are looked up.
pub(crate) struct TestParts {
    pub id: u64,
    pub count: usize,
    pub chutes: Vec<(usize, ParachuteRef)>,
    pub lookups: Cell<usize>,
}

impl TestParts {
    pub fn new(id: u64, count: usize, chutes: Vec<(usize, ParachuteRef)>) -> Self {
        Self { id, count, chutes, lookups: Cell::new(0) }
    }
}

impl PartList for TestParts {
    fn vessel_id(&self) -> u64 { self.id }
    fn part_count(&self) -> usize { self.count }
    fn parachute(&self, index: usize) -> Option<ParachuteRef> {
        self.lookups.set(self.lookups.get() + 1);
        self.chutes.iter().find(|(i, _)| *i == index).map(|(_, chute)| *chute)
    }
}

/// Body with a constant 1 atm, flat terrain at datum and surface gravity of
/// exactly `g` at `reference_radius`.
pub(crate) fn sea_level_body(g: f64, reference_radius: f64) -> SphericalBody {
    SphericalBody::new("Testbed", 600_000.0, g * reference_radius * reference_radius).with_atmosphere(
        super::Atmosphere { sea_level_atm: 1.0, scale_height: f64::INFINITY, depth: f64::INFINITY },
    )
}

/// Builds the telemetry of a vessel moving along `trajectory`, read at its epoch.
pub(crate) fn snapshot<'a>(
    body: &'a SphericalBody,
    trajectory: &'a LinearTrajectory,
    situation: Situation,
) -> VesselSnapshot<'a> {
    let pos = trajectory.pos;
    let (lat, lon) = body.lat_lon(pos);
    let altitude_asl = pos.abs() - body.radius();
    let terrain = body.terrain_height(lat, lon).unwrap_or(0.0);
    let (vertical_speed, _) = trajectory.vel.decompose(pos);
    VesselSnapshot {
        situation,
        position: pos,
        orbital_velocity: trajectory.vel,
        vertical_speed,
        altitude_asl,
        altitude_terrain: altitude_asl - terrain,
        universal_time: trajectory.epoch,
        body,
        trajectory,
    }
}

/// Straight-line descent directly above the point `(R, 0, 0)`.
pub(crate) fn descent(
    body: &SphericalBody,
    clearance: f64,
    vertical_speed: f64,
    horizontal_speed: f64,
) -> LinearTrajectory {
    LinearTrajectory::new(
        Vec3D::new(body.radius() + clearance, 0.0, 0.0),
        Vec3D::new(vertical_speed, horizontal_speed, 0.0),
    )
}
