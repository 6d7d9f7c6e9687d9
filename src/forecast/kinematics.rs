use crate::vessel::{CelestialBody, Vec3D, VesselSnapshot};

/// Radial state of the vessel at a (possibly projected) instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicSample {
    /// Distance from the center of the body in meters.
    pub distance_from_center: f64,
    /// Vertical distance to the surface below (water surface over oceans).
    pub ground_clearance: f64,
    /// Magnitude of the velocity orthogonal to local up.
    pub horizontal_speed: f64,
    /// Velocity component along local up, negative while descending.
    pub vertical_speed: f64,
}

/// Samples the vessel's radial kinematics at `target_time`.
///
/// At `target_time == current_time` the live telemetry is read directly. Any
/// other instant propagates the trajectory and looks up the idealized terrain
/// below the projected position, corrected for the body rotation in between.
#[allow(clippy::float_cmp)]
pub fn sample(vessel: &VesselSnapshot<'_>, target_time: f64, current_time: f64) -> KinematicSample {
    if target_time == current_time {
        let (_, horizontal_speed) = vessel.orbital_velocity.decompose(vessel.position);
        return KinematicSample {
            distance_from_center: vessel.position.abs(),
            ground_clearance: vessel.clearance(),
            horizontal_speed,
            vertical_speed: vessel.vertical_speed,
        };
    }

    let pos = vessel.trajectory.relative_position_at(target_time);
    let vel = vessel.trajectory.velocity_at(target_time);
    let distance_from_center = pos.abs();
    let altitude = distance_from_center - vessel.body.radius();
    let surface = surface_altitude(vessel.body, pos, target_time - current_time);
    let (vertical_speed, horizontal_speed) = vel.decompose(pos);
    KinematicSample {
        distance_from_center,
        ground_clearance: altitude - surface,
        horizontal_speed,
        vertical_speed,
    }
}

/// Height above datum of the nearest surface below `rel_pos`, `elapsed` seconds
/// from now.
///
/// Over oceans the water surface at datum is returned instead of the sea floor,
/// and bodies without a terrain model report zero.
pub fn surface_altitude(body: &dyn CelestialBody, rel_pos: Vec3D<f64>, elapsed: f64) -> f64 {
    let (lat, mut lon) = body.lat_lon(rel_pos);
    if let Some(period) = body.rotation_period() {
        lon = wrap_longitude(lon - 360.0 * elapsed / period);
    }
    let terrain = body.terrain_height(lat, lon).unwrap_or(0.0);
    if body.has_ocean() && terrain < 0.0 { 0.0 } else { terrain }
}

/// Wraps a longitude in degrees into `[-180, 180)`.
pub fn wrap_longitude(lon: f64) -> f64 { (lon + 180.0).rem_euclid(360.0) - 180.0 }
