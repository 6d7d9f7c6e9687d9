//! Flight replay: flies a ballistic arc over a ridge on a Kerbin-sized body and
//! feeds every frame through a [`FlightSession`], standing in for the host.

use altimeter_autoswitch::mode_control::{AltitudeMode, FlightSession, Frame, SwitchConfig, SwitchSignal};
use altimeter_autoswitch::vessel::{
    Atmosphere, CelestialBody, KeplerOrbit, ParachuteRef, ParachuteState, PartList, Situation, SphericalBody, Vec3D,
    VesselSnapshot,
};
use altimeter_autoswitch::{error, fatal, info, log, warn};
use chrono::{TimeDelta, Utc};

const FRAME_DT: f64 = 0.02;
const FRAME_WALL_DT: TimeDelta = TimeDelta::milliseconds(20);
const MAX_SIM_SECONDS: f64 = 120.0;

const START_ALTITUDE: f64 = 3_000.0;
const START_LON_DEG: f64 = -0.8;
const START_HOR_SPEED: f64 = 300.0;
const START_VERT_SPEED: f64 = 40.0;
const RIDGE_LON_DEG: f64 = -0.3;
const RIDGE_HEIGHT: f64 = 2_000.0;

const MANUAL_CLICK_AT: f64 = 6.0;
const CHUTE_ARM_AT: f64 = 22.0;
const CHUTE_PART_INDEX: usize = 7;
const REPLAY_VESSEL_ID: u64 = 0x4B_45_52_42;

/// Parts of the replayed vessel: a single chute on an otherwise plain stack.
struct ReplayParts {
    part_count: usize,
    chute: ParachuteRef,
}

impl PartList for ReplayParts {
    fn vessel_id(&self) -> u64 { REPLAY_VESSEL_ID }
    fn part_count(&self) -> usize { self.part_count }
    fn parachute(&self, index: usize) -> Option<ParachuteRef> { (index == CHUTE_PART_INDEX).then_some(self.chute) }
}

fn ridge_terrain(_lat: f64, lon: f64) -> f64 {
    let sea_floor = if lon < -0.6 { -150.0 } else { 60.0 };
    sea_floor + RIDGE_HEIGHT * (-((lon - RIDGE_LON_DEG) / 0.05).powi(2)).exp()
}

fn main() {
    let config = SwitchConfig::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e}"));
    let body = SphericalBody::new("Kerbin", 600_000.0, 3.531_6e12)
        .with_ocean()
        .with_atmosphere(Atmosphere { sea_level_atm: 1.0, scale_height: 5_600.0, depth: 70_000.0 })
        .with_terrain(Box::new(ridge_terrain));

    let lon = START_LON_DEG.to_radians();
    let up = Vec3D::new(lon.cos(), lon.sin(), 0.0);
    let east = Vec3D::new(-lon.sin(), lon.cos(), 0.0);
    let r_0 = up * (body.radius() + START_ALTITUDE);
    let v_0 = east * START_HOR_SPEED + up * START_VERT_SPEED;
    let orbit = match KeplerOrbit::new(r_0, v_0, body.grav_param(), 0.0) {
        Ok(orbit) => orbit,
        Err(e) => {
            error!("Cannot build replay trajectory: {e}");
            return;
        }
    };

    let mut parts = ReplayParts {
        part_count: 12,
        chute: ParachuteRef { state: ParachuteState::Stowed, deploy_altitude: 1_000.0 },
    };
    let mut session = FlightSession::new();
    let mut displayed = AltitudeMode::Asl;
    let mut now = Utc::now();
    let mut ut = 0.0;
    let mut commands = 0usize;
    let mut clicked = false;

    session.on_signal(SwitchSignal::FlightStarted, now);
    info!("Replaying descent over {} with {config:?}", body.name());

    let touchdown = loop {
        let (pos, vel) = orbit.state_at(ut);
        let altitude_asl = pos.abs() - body.radius();
        let (lat, lon_deg) = body.lat_lon(pos);
        let terrain = body.terrain_height(lat, lon_deg).unwrap_or(0.0);
        let (vertical_speed, _) = vel.decompose(pos);
        let vessel = VesselSnapshot {
            situation: Situation::Flying,
            position: pos,
            orbital_velocity: vel,
            vertical_speed,
            altitude_asl,
            altitude_terrain: altitude_asl - terrain,
            universal_time: ut,
            body: &body,
            trajectory: &orbit,
        };
        if vessel.clearance() <= 0.0 {
            break Some(ut);
        }
        if ut > MAX_SIM_SECONDS {
            break None;
        }

        if !clicked && ut >= MANUAL_CLICK_AT {
            clicked = true;
            session.on_signal(SwitchSignal::ManualToggle, now);
            displayed = displayed.toggled();
            session.on_signal(SwitchSignal::ModeChanged(displayed), now);
            log!("Pilot toggled the altimeter to {displayed} at {ut:.1}s");
        }
        if parts.chute.state == ParachuteState::Stowed && ut >= CHUTE_ARM_AT {
            parts.chute.state = ParachuteState::Armed;
            log!("Chute armed at {ut:.1}s, {:.0}m above terrain", vessel.clearance());
        }

        let frame = Frame { vessel, parts: &parts, displayed };
        if let Some(command) = session.on_frame(now, Some(&frame), &config) {
            commands += 1;
            displayed = command.mode;
            session.on_signal(SwitchSignal::ModeChanged(displayed), now);
        }

        ut += FRAME_DT;
        now += FRAME_WALL_DT;
    };

    match touchdown {
        Some(t) => {
            info!("Touchdown after {t:.1}s, {commands} automatic switches, showing {displayed}");
            if displayed != AltitudeMode::Agl {
                warn!("Vessel reached the ground while the altimeter showed {displayed}");
            }
        }
        None => warn!("No touchdown within {MAX_SIM_SECONDS}s, {commands} automatic switches"),
    }
}
