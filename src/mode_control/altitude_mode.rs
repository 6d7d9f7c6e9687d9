use strum_macros::{Display, EnumIter, EnumString};

/// What the altimeter shows.
#[derive(
    Debug, Display, EnumString, EnumIter, PartialEq, Eq, Clone, Copy, Hash, serde::Serialize, serde::Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum AltitudeMode {
    /// Height above the sea-level datum.
    #[strum(serialize = "ASL")]
    Asl,
    /// Height above the terrain directly below.
    #[strum(serialize = "AGL")]
    Agl,
}

impl AltitudeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AltitudeMode::Asl => AltitudeMode::Agl,
            AltitudeMode::Agl => AltitudeMode::Asl,
        }
    }
}
