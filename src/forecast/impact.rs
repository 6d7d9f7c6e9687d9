use super::kinematics::KinematicSample;
use crate::vessel::Situation;

/// Extra fall distance a decelerating vessel must be able to cover before it is
/// considered to reach the surface at all.
const CLEARANCE_MARGIN: f64 = 1.0;
/// Net accelerations below this magnitude are treated as zero.
const ACCEL_EPS: f64 = 1e-9;

/// Estimates the free-fall time until the vessel hits the surface.
///
/// Only gravity and the curvature (centripetal) correction act on the vessel:
/// thrust and drag are ignored, so the estimate reflects how soon the ground
/// arrives if the pilot does nothing. The constant-acceleration model is only
/// meaningful over short horizons.
///
/// # Arguments
/// - `situation`: The situation category of the vessel.
/// - `periapsis_below_surface`: Whether the current conic reaches the mean radius.
/// - `sample`: The kinematic state to extrapolate from.
/// - `grav_param`: Gravitational parameter of the body.
///
/// # Returns
/// - Seconds until impact, `f64::INFINITY` if the vessel never reaches the surface.
pub fn time_to_impact(
    situation: Situation,
    periapsis_below_surface: bool,
    sample: &KinematicSample,
    grav_param: f64,
) -> f64 {
    let clearance = sample.ground_clearance;
    if clearance.is_infinite() || !may_impact(situation, periapsis_below_surface, sample.vertical_speed) {
        return f64::INFINITY;
    }
    if clearance <= 0.0 {
        return 0.0;
    }

    let r = sample.distance_from_center;
    let centripetal = sample.horizontal_speed.powi(2) / r;
    let gravity = grav_param / (r * r);
    let accel = gravity - centripetal;
    let fall_speed = (-sample.vertical_speed).max(0.0);

    if accel < 0.0 {
        let max_fall = fall_speed * fall_speed / (2.0 * -accel);
        if max_fall < clearance + CLEARANCE_MARGIN {
            return f64::INFINITY;
        }
    }

    if accel.abs() < ACCEL_EPS {
        return if fall_speed > 0.0 { clearance / fall_speed } else { f64::INFINITY };
    }

    // positive root of clearance = fall_speed * t + accel * t² / 2
    let discriminant = fall_speed * fall_speed + 2.0 * accel * clearance;
    (discriminant.max(0.0).sqrt() - fall_speed) / accel
}

fn may_impact(situation: Situation, periapsis_below_surface: bool, vertical_speed: f64) -> bool {
    match situation {
        Situation::Flying | Situation::SubOrbital => true,
        s if s.is_orbital() => periapsis_below_surface && vertical_speed <= 0.0,
        _ => false,
    }
}
