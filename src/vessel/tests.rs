use super::testing::{LinearTrajectory, TestParts, snapshot};
use super::{
    CelestialBody, KeplerOrbit, OrbitError, ParachuteCache, ParachuteRef, ParachuteState, Situation, SphericalBody,
    Trajectory, Vec3D, activation_altitude,
};
use rand::Rng;

const KERBIN_MU: f64 = 3.531_6e12;
const KERBIN_R: f64 = 600_000.0;

fn chute(state: ParachuteState, deploy_altitude: f64) -> ParachuteRef { ParachuteRef { state, deploy_altitude } }

#[test]
fn test_circular_orbit_keeps_radius_and_energy() {
    let r = 700_000.0;
    let v = (KERBIN_MU / r).sqrt();
    let orbit = KeplerOrbit::new(Vec3D::new(r, 0.0, 0.0), Vec3D::new(0.0, v, 0.0), KERBIN_MU, 100.0).unwrap();
    let mut rng = rand::rng();
    for _ in 0..20 {
        let ut = 100.0 + rng.random_range(0.0..5_000.0);
        let (pos, vel) = orbit.state_at(ut);
        assert!((pos.abs() - r).abs() / r < 1e-6, "radius drifted at {ut}: {}", pos.abs());
        let energy = vel.dot(vel) / 2.0 - KERBIN_MU / pos.abs();
        assert!((energy - orbit.specific_energy()).abs() / orbit.specific_energy().abs() < 1e-6);
    }
    assert!((orbit.periapsis_radius() - r).abs() < 1e-3);
}

#[test]
fn test_kepler_short_drop_matches_free_fall() {
    let r = KERBIN_R + 200.0;
    let orbit = KeplerOrbit::new(Vec3D::new(r, 0.0, 0.0), Vec3D::zero(), KERBIN_MU, 0.0).unwrap();
    let g = KERBIN_MU / (r * r);
    let drop = r - orbit.relative_position_at(1.0).abs();
    assert!((drop - g / 2.0).abs() < 1e-2, "dropped {drop}m, expected {}", g / 2.0);
    let (vertical, horizontal) = orbit.velocity_at(1.0).decompose(orbit.relative_position_at(1.0));
    assert!((vertical + g).abs() < 1e-2);
    assert!(horizontal.abs() < 1e-6);
    assert!(orbit.periapsis_radius().abs() < 1e-9);
}

#[test]
fn test_suborbital_periapsis_below_surface() {
    let r = KERBIN_R + 10_000.0;
    let orbit = KeplerOrbit::new(Vec3D::new(r, 0.0, 0.0), Vec3D::new(-50.0, 800.0, 0.0), KERBIN_MU, 0.0).unwrap();
    assert!(orbit.periapsis_radius() < KERBIN_R);

    let escape = (2.0 * KERBIN_MU / r).sqrt() * 1.2;
    let hyperbolic = KeplerOrbit::new(Vec3D::new(r, 0.0, 0.0), Vec3D::new(0.0, escape, 0.0), KERBIN_MU, 0.0).unwrap();
    assert!(hyperbolic.specific_energy() > 0.0);
    assert!((hyperbolic.periapsis_radius() - r).abs() < 1e-3);
    assert!(hyperbolic.relative_position_at(600.0).abs() > r);
}

#[test]
fn test_kepler_rejects_degenerate_input() {
    let v = Vec3D::new(0.0, 100.0, 0.0);
    assert_eq!(
        KeplerOrbit::new(Vec3D::new(KERBIN_R, 0.0, 0.0), v, 0.0, 0.0).unwrap_err(),
        OrbitError::NonPositiveGravParam
    );
    assert_eq!(KeplerOrbit::new(Vec3D::zero(), v, KERBIN_MU, 0.0).unwrap_err(), OrbitError::DegenerateState);
}

#[test]
fn test_clearance_measured_to_water_over_ocean() {
    let body = SphericalBody::new("Sea", KERBIN_R, KERBIN_MU).with_ocean().with_terrain(Box::new(|_, _| -300.0));
    let trajectory = LinearTrajectory::new(Vec3D::new(KERBIN_R + 120.0, 0.0, 0.0), Vec3D::new(-5.0, 0.0, 0.0));
    let vessel = snapshot(&body, &trajectory, Situation::Flying);
    assert!((vessel.altitude_terrain - 420.0).abs() < 1e-6);
    assert!((vessel.clearance() - 120.0).abs() < 1e-6);
    assert!((vessel.descent_speed() - 5.0).abs() < 1e-9);

    let dry = SphericalBody::new("Basin", KERBIN_R, KERBIN_MU).with_terrain(Box::new(|_, _| -300.0));
    let vessel = snapshot(&dry, &trajectory, Situation::Flying);
    assert!((vessel.clearance() - 420.0).abs() < 1e-6);
}

#[test]
fn test_lat_lon_of_body_frame() {
    let body = SphericalBody::new("Round", KERBIN_R, KERBIN_MU);
    let (lat, lon) = body.lat_lon(Vec3D::new(0.0, KERBIN_R, 0.0));
    assert!(lat.abs() < 1e-9);
    assert!((lon - 90.0).abs() < 1e-9);
    let (lat, _) = body.lat_lon(Vec3D::new(0.0, 0.0, -KERBIN_R));
    assert!((lat + 90.0).abs() < 1e-9);
    assert_eq!(body.terrain_height(10.0, 10.0), None);
    assert!(body.pressure_atm(0.0).abs() < f64::EPSILON);
}

#[test]
fn test_activation_altitude_ignores_inactive_chutes() {
    let chutes = vec![
        chute(ParachuteState::Stowed, 5_000.0),
        chute(ParachuteState::Armed, 800.0),
        chute(ParachuteState::Deploying, 1_200.0),
        chute(ParachuteState::Cut, 9_000.0),
    ];
    assert!((activation_altitude(&chutes) - 1_200.0).abs() < f64::EPSILON);
    assert!(activation_altitude(&[]).abs() < f64::EPSILON);
    assert!(activation_altitude(&chutes[..1]).abs() < f64::EPSILON);
}

#[test]
fn test_parachute_cache_rebuilds_only_on_key_change() {
    let mut parts = TestParts::new(1, 12, vec![(3, chute(ParachuteState::Stowed, 1_000.0))]);
    let mut cache = ParachuteCache::new();

    let first = cache.parachutes(&parts);
    assert_eq!(first.len(), 1);
    assert_eq!(parts.lookups.get(), 12 + 1);
    assert!(cache.is_valid_for(&parts));

    // states are read live without a rescan
    parts.chutes[0].1.state = ParachuteState::Armed;
    let second = cache.parachutes(&parts);
    assert_eq!(second[0].state, ParachuteState::Armed);
    assert_eq!(parts.lookups.get(), 12 + 2);

    parts.count = 14;
    parts.chutes.push((13, chute(ParachuteState::Armed, 2_000.0)));
    assert!(!cache.is_valid_for(&parts));
    let third = cache.parachutes(&parts);
    assert_eq!(third.len(), 2);
    assert_eq!(cache.cached_len(), 2);
    assert_eq!(parts.lookups.get(), 12 + 2 + 14 + 2);

    parts.id = 2;
    assert!(!cache.is_valid_for(&parts));
    cache.parachutes(&parts);
    assert!(cache.is_valid_for(&parts));

    cache.invalidate();
    assert_eq!(cache.cached_len(), 0);
    assert!(!cache.is_valid_for(&parts));
}

#[test]
fn test_situation_categories() {
    assert!(Situation::Prelaunch.is_on_surface());
    assert!(Situation::Splashed.is_on_surface());
    assert!(!Situation::Flying.is_on_surface());
    assert!(Situation::Escaping.is_orbital());
    assert_eq!(Situation::from("SUB_ORBITAL"), Situation::SubOrbital);
    assert_eq!(Situation::from("something else"), Situation::Docked);
    assert_eq!(<&'static str>::from(Situation::Landed), "landed");
}
