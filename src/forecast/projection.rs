use super::{impact::time_to_impact, kinematics::sample};
use crate::vessel::VesselSnapshot;

/// Result of a path projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactProjection {
    /// Most pessimistic time to impact from now, in seconds.
    pub soonest: f64,
    /// Offset from now of the sample that produced `soonest`, zero for the present.
    pub lead_time: f64,
}

/// Forward-samples the current trajectory for the soonest impact.
pub struct PathProjector;

impl PathProjector {
    /// Simulated seconds between two projected samples.
    pub const SAMPLE_INTERVAL: f64 = 2.0;
    /// Number of projected samples at most.
    pub const MAX_SAMPLES: u32 = 15;

    /// Finds the soonest impact within the projection horizon.
    ///
    /// The present instant is always evaluated from live telemetry. With path
    /// projection enabled, the trajectory is additionally sampled every
    /// [`Self::SAMPLE_INTERVAL`] seconds, stopping once an offset passes
    /// `threshold`. Each projected estimate is measured from its own instant, so
    /// a level flight towards rising terrain shows up before the clearance
    /// right below the vessel shrinks.
    ///
    /// # Arguments
    /// - `vessel`: The telemetry snapshot of the current frame.
    /// - `threshold`: The active collision-time threshold in seconds.
    /// - `path_projection`: Whether to sample ahead of the present at all.
    pub fn project_impact_time(vessel: &VesselSnapshot<'_>, threshold: f64, path_projection: bool) -> ImpactProjection {
        let now = vessel.universal_time;
        let grav_param = vessel.body.grav_param();
        let below_surface = vessel.periapsis_below_surface();

        let present = sample(vessel, now, now);
        let mut best = ImpactProjection {
            soonest: time_to_impact(vessel.situation, below_surface, &present, grav_param),
            lead_time: 0.0,
        };
        if !path_projection {
            return best;
        }

        for step in 1..=Self::MAX_SAMPLES {
            let offset = f64::from(step) * Self::SAMPLE_INTERVAL;
            if offset > threshold {
                break;
            }
            let projected = sample(vessel, now + offset, now);
            let total = offset + time_to_impact(vessel.situation, below_surface, &projected, grav_param);
            if total < best.soonest {
                best = ImpactProjection { soonest: total, lead_time: offset };
            }
        }
        best
    }
}
