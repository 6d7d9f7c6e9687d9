use super::vec3d::Vec3D;
use strum_macros::Display;

/// Orbit propagation primitives supplied by the host for the active vessel.
///
/// All positions are relative to the center of the reference body, all times
/// are universal time in seconds.
pub trait Trajectory {
    /// Position relative to the body center at universal time `ut`.
    fn relative_position_at(&self, ut: f64) -> Vec3D<f64>;
    /// Inertial (orbital) velocity at universal time `ut`.
    fn velocity_at(&self, ut: f64) -> Vec3D<f64>;
    /// Radius of the periapsis in meters, measured from the body center.
    fn periapsis_radius(&self) -> f64;
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum OrbitError {
    NonPositiveGravParam,
    DegenerateState,
}

impl std::error::Error for OrbitError {}

/// Two-body Keplerian trajectory through a single epoch state vector.
///
/// Propagation uses the universal anomaly formulation, so elliptic, parabolic
/// and hyperbolic arcs are handled alike.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct KeplerOrbit {
    /// Position relative to the body center at `epoch`.
    r_0: Vec3D<f64>,
    /// Inertial velocity at `epoch`.
    v_0: Vec3D<f64>,
    /// Gravitational parameter of the central body.
    mu: f64,
    /// Universal time of the state vector.
    epoch: f64,
}

impl KeplerOrbit {
    /// Convergence tolerance on the universal anomaly.
    const CHI_TOL: f64 = 1e-9;
    const MAX_NEWTON_ITER: usize = 60;
    /// Below this `|z|` the Stumpff functions switch to their series expansion.
    const STUMPFF_SERIES_LIMIT: f64 = 1e-6;

    /// Creates a new [`KeplerOrbit`] from a state vector.
    ///
    /// # Errors
    /// - [`OrbitError::NonPositiveGravParam`] if `mu` is not strictly positive.
    /// - [`OrbitError::DegenerateState`] if the position vector is zero or not finite.
    pub fn new(r_0: Vec3D<f64>, v_0: Vec3D<f64>, mu: f64, epoch: f64) -> Result<Self, OrbitError> {
        if mu <= 0.0 || !mu.is_finite() {
            return Err(OrbitError::NonPositiveGravParam);
        }
        let r = r_0.abs();
        if r <= 0.0 || !r.is_finite() || !v_0.abs().is_finite() {
            return Err(OrbitError::DegenerateState);
        }
        Ok(Self { r_0, v_0, mu, epoch })
    }

    /// Specific orbital energy `v²/2 - mu/r`, constant along the trajectory.
    pub fn specific_energy(&self) -> f64 {
        self.v_0.dot(self.v_0) / 2.0 - self.mu / self.r_0.abs()
    }

    fn stumpff_c(z: f64) -> f64 {
        if z.abs() < Self::STUMPFF_SERIES_LIMIT {
            0.5 - z / 24.0
        } else if z > 0.0 {
            (1.0 - z.sqrt().cos()) / z
        } else {
            ((-z).sqrt().cosh() - 1.0) / -z
        }
    }

    fn stumpff_s(z: f64) -> f64 {
        if z.abs() < Self::STUMPFF_SERIES_LIMIT {
            1.0 / 6.0 - z / 120.0
        } else if z > 0.0 {
            let sz = z.sqrt();
            (sz - sz.sin()) / sz.powi(3)
        } else {
            let sz = (-z).sqrt();
            (sz.sinh() - sz) / sz.powi(3)
        }
    }

    /// Solves the universal Kepler equation for the anomaly after `dt` seconds.
    ///
    /// # Returns
    /// - A tuple `(chi, alpha)` of the universal anomaly and the reciprocal semi-major axis.
    fn universal_anomaly(&self, dt: f64) -> (f64, f64) {
        let r0 = self.r_0.abs();
        let sqrt_mu = self.mu.sqrt();
        let vr0 = self.r_0.dot(self.v_0) / r0;
        let alpha = 2.0 / r0 - self.v_0.dot(self.v_0) / self.mu;

        let mut chi = if alpha.abs() > 1e-12 { sqrt_mu * alpha.abs() * dt } else { sqrt_mu * dt / r0 };
        for _ in 0..Self::MAX_NEWTON_ITER {
            let z = alpha * chi * chi;
            let c = Self::stumpff_c(z);
            let s = Self::stumpff_s(z);
            let f = r0 * vr0 / sqrt_mu * chi * chi * c
                + (1.0 - alpha * r0) * chi.powi(3) * s
                + r0 * chi
                - sqrt_mu * dt;
            let df = r0 * vr0 / sqrt_mu * chi * (1.0 - z * s) + (1.0 - alpha * r0) * chi * chi * c + r0;
            let step = f / df;
            chi -= step;
            if step.abs() < Self::CHI_TOL {
                break;
            }
        }
        (chi, alpha)
    }

    /// Propagates the epoch state vector to universal time `ut`.
    ///
    /// # Returns
    /// - A tuple `(position, velocity)` at `ut`.
    pub fn state_at(&self, ut: f64) -> (Vec3D<f64>, Vec3D<f64>) {
        let dt = ut - self.epoch;
        if dt == 0.0 {
            return (self.r_0, self.v_0);
        }
        let r0 = self.r_0.abs();
        let sqrt_mu = self.mu.sqrt();
        let (chi, alpha) = self.universal_anomaly(dt);
        let z = alpha * chi * chi;
        let c = Self::stumpff_c(z);
        let s = Self::stumpff_s(z);

        let f = 1.0 - chi * chi / r0 * c;
        let g = dt - chi.powi(3) / sqrt_mu * s;
        let pos = self.r_0 * f + self.v_0 * g;
        let r = pos.abs();

        let f_dot = sqrt_mu / (r * r0) * (z * chi * s - chi);
        let g_dot = 1.0 - chi * chi / r * c;
        let vel = self.r_0 * f_dot + self.v_0 * g_dot;
        (pos, vel)
    }
}

impl Trajectory for KeplerOrbit {
    fn relative_position_at(&self, ut: f64) -> Vec3D<f64> { self.state_at(ut).0 }

    fn velocity_at(&self, ut: f64) -> Vec3D<f64> { self.state_at(ut).1 }

    fn periapsis_radius(&self) -> f64 {
        let h = self.r_0.cross(self.v_0);
        let h_sq = h.dot(h);
        if h_sq <= 0.0 {
            // radial trajectory, the conic degenerates into a line through the center
            return 0.0;
        }
        let e_vec = self.v_0.cross(h) / self.mu - self.r_0.normalize();
        let p = h_sq / self.mu;
        p / (1.0 + e_vec.abs())
    }
}
