use super::{body::CelestialBody, orbit::Trajectory, situation::Situation, vec3d::Vec3D};

/// Read-only telemetry of the active vessel for a single frame.
///
/// The body and trajectory are borrowed from the host for the duration of the
/// evaluation; nothing in here outlives the frame.
pub struct VesselSnapshot<'a> {
    pub situation: Situation,
    /// Position relative to the center of `body`.
    pub position: Vec3D<f64>,
    /// Inertial (orbital) velocity.
    pub orbital_velocity: Vec3D<f64>,
    /// Signed vertical speed in m/s, positive upwards.
    pub vertical_speed: f64,
    /// Altitude above the datum (sea level).
    pub altitude_asl: f64,
    /// Altitude above the terrain directly below, ocean floor included.
    pub altitude_terrain: f64,
    /// Universal time of the snapshot in seconds.
    pub universal_time: f64,
    pub body: &'a dyn CelestialBody,
    pub trajectory: &'a dyn Trajectory,
}

impl VesselSnapshot<'_> {
    /// Height of the terrain below the vessel above datum; negative over ocean floors.
    pub fn terrain_altitude(&self) -> f64 { self.altitude_asl - self.altitude_terrain }

    /// Vertical distance to the nearest surface below, water included.
    pub fn clearance(&self) -> f64 {
        if self.body.has_ocean() && self.terrain_altitude() < 0.0 {
            self.altitude_asl
        } else {
            self.altitude_terrain
        }
    }

    /// Descent rate in m/s, zero while climbing.
    pub fn descent_speed(&self) -> f64 { (-self.vertical_speed).max(0.0) }

    /// Static pressure in atmospheres at the current altitude, zero without atmosphere.
    pub fn static_pressure_atm(&self) -> f64 {
        if self.body.has_atmosphere() { self.body.pressure_atm(self.altitude_asl) } else { 0.0 }
    }

    /// Whether the current conic passes beneath the mean radius of the body.
    pub fn periapsis_below_surface(&self) -> bool {
        self.trajectory.periapsis_radius() <= self.body.radius()
    }
}
