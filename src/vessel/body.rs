use super::vec3d::Vec3D;

/// Idealized terrain model: surface height above datum in meters at `(lat°, lon°)`.
pub type TerrainFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Constants and lookup functions of the body the vessel is currently orbiting.
///
/// Positions handed to a body are relative to its center, expressed in a frame
/// whose z-axis is the rotation axis and which is aligned with the body-fixed
/// frame at the *current* instant.
pub trait CelestialBody {
    fn name(&self) -> &str;
    /// Mean radius in meters; also the datum for sea level.
    fn radius(&self) -> f64;
    /// Gravitational parameter `G * M` in m³/s².
    fn grav_param(&self) -> f64;
    /// Sidereal rotation period in seconds, `None` if the body does not rotate.
    fn rotation_period(&self) -> Option<f64>;
    fn has_ocean(&self) -> bool;
    fn has_atmosphere(&self) -> bool;
    /// Static pressure in atmospheres at `altitude` meters above datum.
    fn pressure_atm(&self, altitude: f64) -> f64;
    /// Height of the idealized terrain surface above datum, `None` if the body
    /// has no terrain model (e.g. a star).
    fn terrain_height(&self, lat_deg: f64, lon_deg: f64) -> Option<f64>;

    /// Converts a body-centered position into latitude/longitude in degrees.
    fn lat_lon(&self, rel_pos: Vec3D<f64>) -> (f64, f64) {
        let r = rel_pos.abs();
        if r <= 0.0 {
            return (0.0, 0.0);
        }
        let lat = (rel_pos.z() / r).clamp(-1.0, 1.0).asin().to_degrees();
        let lon = rel_pos.y().atan2(rel_pos.x()).to_degrees();
        (lat, lon)
    }
}

/// Exponential atmosphere with a hard upper boundary.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Atmosphere {
    /// Pressure at datum in atmospheres.
    pub sea_level_atm: f64,
    /// Scale height in meters.
    pub scale_height: f64,
    /// Altitude above which the pressure is zero.
    pub depth: f64,
}

impl Atmosphere {
    pub fn pressure_at(&self, altitude: f64) -> f64 {
        if altitude >= self.depth {
            0.0
        } else {
            self.sea_level_atm * (-altitude.max(0.0) / self.scale_height).exp()
        }
    }
}

/// A spherical body with an optional analytic terrain function.
pub struct SphericalBody {
    name: String,
    radius: f64,
    grav_param: f64,
    rotation_period: Option<f64>,
    ocean: bool,
    atmosphere: Option<Atmosphere>,
    terrain: Option<TerrainFn>,
}

impl SphericalBody {
    /// Creates a non-rotating, airless, oceanless body without a terrain model.
    pub fn new(name: &str, radius: f64, grav_param: f64) -> Self {
        Self {
            name: name.to_string(),
            radius,
            grav_param,
            rotation_period: None,
            ocean: false,
            atmosphere: None,
            terrain: None,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, period: f64) -> Self {
        self.rotation_period = Some(period);
        self
    }

    #[must_use]
    pub fn with_ocean(mut self) -> Self {
        self.ocean = true;
        self
    }

    #[must_use]
    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    #[must_use]
    pub fn with_terrain(mut self, terrain: TerrainFn) -> Self {
        self.terrain = Some(terrain);
        self
    }
}

impl CelestialBody for SphericalBody {
    fn name(&self) -> &str { &self.name }
    fn radius(&self) -> f64 { self.radius }
    fn grav_param(&self) -> f64 { self.grav_param }
    fn rotation_period(&self) -> Option<f64> { self.rotation_period.filter(|p| *p != 0.0) }
    fn has_ocean(&self) -> bool { self.ocean }
    fn has_atmosphere(&self) -> bool { self.atmosphere.is_some() }

    fn pressure_atm(&self, altitude: f64) -> f64 {
        self.atmosphere.map_or(0.0, |atmo| atmo.pressure_at(altitude))
    }

    fn terrain_height(&self, lat_deg: f64, lon_deg: f64) -> Option<f64> {
        self.terrain.as_ref().map(|terrain| terrain(lat_deg, lon_deg))
    }
}
