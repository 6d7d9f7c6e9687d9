use super::{altitude_mode::AltitudeMode, config::SwitchConfig};
use crate::forecast::{ImpactProjection, PathProjector};
use crate::vessel::{ParachuteRef, VesselSnapshot, activation_altitude};
use itertools::Itertools;

/// A target mode and why it was chosen.
///
/// The justification is only filled in when the mode differs from the one the
/// engine was told is currently shown; otherwise it is empty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Recommendation {
    pub mode: AltitudeMode,
    pub justification: String,
}

impl Recommendation {
    fn new(mode: AltitudeMode, previous: AltitudeMode, reason: impl FnOnce() -> String) -> Self {
        let justification = if mode == previous { String::new() } else { reason() };
        Self { mode, justification }
    }
}

/// Stateless decision on which altimeter mode fits the vessel's situation.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Recommends a display mode for the current frame.
    ///
    /// Checks run in order and the first one that fires wins:
    /// 1. On the surface, the configured landed mode.
    /// 2. AGL if the projected impact time undercuts the collision threshold.
    /// 3. AGL if the clearance is below the multiplied chute deployment altitude.
    /// 4. ASL otherwise.
    ///
    /// # Arguments
    /// - `vessel`: Telemetry of the current frame.
    /// - `parachutes`: Live state of every parachute on the vessel.
    /// - `config`: Thresholds and switches for this evaluation.
    /// - `previous`: The mode currently shown, used to skip building unchanged justifications.
    pub fn recommend(
        vessel: &VesselSnapshot<'_>,
        parachutes: &[ParachuteRef],
        config: &SwitchConfig,
        previous: AltitudeMode,
    ) -> Recommendation {
        if vessel.situation.is_on_surface() {
            return Recommendation::new(config.landed_mode, previous, || "on surface".to_string());
        }

        let clearance = vessel.clearance();
        let descent = vessel.descent_speed();
        let mut passed = Vec::new();

        if let Some(threshold) = config.collision_threshold(vessel.static_pressure_atm()) {
            let projection = PathProjector::project_impact_time(vessel, threshold, config.path_projection);
            if projection.soonest < threshold {
                return Recommendation::new(AltitudeMode::Agl, previous, || {
                    collision_reason(threshold, projection, clearance, descent)
                });
            }
            passed.push(format!("no impact within {threshold:.1}s"));
        }

        if let Some(multiplier) = config.chute_multiplier() {
            let chute_altitude = activation_altitude(parachutes);
            if clearance < chute_altitude * multiplier {
                return Recommendation::new(AltitudeMode::Agl, previous, || {
                    format!(
                        "clearance {clearance:.0}m below {multiplier:.1}x chute altitude {chute_altitude:.0}m{}",
                        descent_suffix(descent)
                    )
                });
            }
            passed.push(format!(
                "clearance {clearance:.0}m above {multiplier:.1}x chute altitude {chute_altitude:.0}m"
            ));
        }

        Recommendation::new(AltitudeMode::Asl, previous, || {
            if passed.is_empty() { "all checks disabled".to_string() } else { passed.iter().join("; ") }
        })
    }
}

fn collision_reason(threshold: f64, projection: ImpactProjection, clearance: f64, descent: f64) -> String {
    let lead = if projection.lead_time > 0.0 {
        format!(" projected {:.0}s ahead", projection.lead_time)
    } else {
        String::new()
    };
    format!(
        "impact in {:.1}s under {threshold:.1}s threshold{lead}, clearance {clearance:.0}m{}",
        projection.soonest,
        descent_suffix(descent)
    )
}

fn descent_suffix(descent: f64) -> String {
    if descent > 0.0 { format!(", descending at {descent:.0}m/s") } else { String::new() }
}
