use super::altitude_mode::AltitudeMode;
use std::env;
use strum_macros::Display;

/// Settings consumed by every evaluation, supplied by the host's settings layer.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Master switch; nothing is evaluated while `false`.
    pub enabled: bool,
    /// Mode shown while landed, splashed down or on the launch pad.
    pub landed_mode: AltitudeMode,
    /// Collision-time threshold at 1 atm, zero disables.
    pub atmo_threshold_secs: u32,
    /// Collision-time threshold in vacuum, zero disables.
    pub vacuum_threshold_secs: u32,
    /// Multiple of the highest chute deployment altitude below which AGL is shown, zero disables.
    pub chute_altitude_multiplier: f64,
    /// Whether to sample the trajectory ahead of the vessel.
    pub path_projection: bool,
}

#[derive(Debug, Display)]
pub enum ConfigError {
    #[strum(to_string = "{var} is not a boolean flag")]
    InvalidFlag { var: String },
    #[strum(to_string = "{var} is not a non-negative number")]
    InvalidNumber { var: String },
    #[strum(to_string = "{var} is neither ASL nor AGL")]
    InvalidMode { var: String },
}

impl std::error::Error for ConfigError {}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            landed_mode: AltitudeMode::Agl,
            atmo_threshold_secs: 10,
            vacuum_threshold_secs: 0,
            chute_altitude_multiplier: 1.5,
            path_projection: true,
        }
    }
}

impl SwitchConfig {
    const ENV_ENABLED: &'static str = "ALTSWITCH_ENABLED";
    const ENV_LANDED_MODE: &'static str = "ALTSWITCH_LANDED_MODE";
    const ENV_ATMO_THRESHOLD: &'static str = "ALTSWITCH_ATMO_THRESHOLD";
    const ENV_VACUUM_THRESHOLD: &'static str = "ALTSWITCH_VACUUM_THRESHOLD";
    const ENV_CHUTE_MULTIPLIER: &'static str = "ALTSWITCH_CHUTE_MULTIPLIER";
    const ENV_PATH_PROJECTION: &'static str = "ALTSWITCH_PATH_PROJECTION";

    /// Collision-time threshold interpolated between the vacuum and atmospheric
    /// settings by the static pressure.
    ///
    /// # Arguments
    /// - `pressure_atm`: Static pressure at the vessel in atmospheres.
    ///
    /// # Returns
    /// - `Some(seconds)` if the interpolated threshold is positive, `None` if disabled.
    pub fn collision_threshold(&self, pressure_atm: f64) -> Option<f64> {
        let vacuum = f64::from(self.vacuum_threshold_secs);
        let atmo = f64::from(self.atmo_threshold_secs);
        let blend = if pressure_atm.is_nan() { 0.0 } else { pressure_atm.clamp(0.0, 1.0) };
        let threshold = vacuum + (atmo - vacuum) * blend;
        (threshold > 0.0).then_some(threshold)
    }

    /// The parachute altitude multiplier, `None` if the parachute check is disabled.
    pub fn chute_multiplier(&self) -> Option<f64> {
        (self.chute_altitude_multiplier > 0.0).then_some(self.chute_altitude_multiplier)
    }

    /// Builds the configuration from defaults overridden by `ALTSWITCH_*` variables.
    ///
    /// # Errors
    /// - A [`ConfigError`] naming the first variable that could not be parsed.
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|var| env::var(var).ok()) }

    /// Builds the configuration from defaults overridden by whatever `lookup` yields.
    ///
    /// # Errors
    /// - A [`ConfigError`] naming the first key that could not be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = lookup(Self::ENV_ENABLED) {
            config.enabled = parse_flag(Self::ENV_ENABLED, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_LANDED_MODE) {
            config.landed_mode = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMode { var: Self::ENV_LANDED_MODE.to_string() })?;
        }
        if let Some(v) = lookup(Self::ENV_ATMO_THRESHOLD) {
            config.atmo_threshold_secs = parse_secs(Self::ENV_ATMO_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_VACUUM_THRESHOLD) {
            config.vacuum_threshold_secs = parse_secs(Self::ENV_VACUUM_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(Self::ENV_CHUTE_MULTIPLIER) {
            config.chute_altitude_multiplier = v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|m| m.is_finite() && *m >= 0.0)
                .ok_or_else(|| ConfigError::InvalidNumber { var: Self::ENV_CHUTE_MULTIPLIER.to_string() })?;
        }
        if let Some(v) = lookup(Self::ENV_PATH_PROJECTION) {
            config.path_projection = parse_flag(Self::ENV_PATH_PROJECTION, &v)?;
        }
        Ok(config)
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var: var.to_string() }),
    }
}

fn parse_secs(var: &str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber { var: var.to_string() })
}
