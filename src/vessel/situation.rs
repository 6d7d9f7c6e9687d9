use strum_macros::{Display, EnumIter};

/// Situation category reported by the host for the active vessel.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Clone, Copy, Hash, serde::Serialize, serde::Deserialize)]
pub enum Situation {
    Landed,
    Splashed,
    Prelaunch,
    Flying,
    SubOrbital,
    Orbiting,
    Escaping,
    Docked,
}

impl Situation {
    /// Whether the vessel is resting on terrain or water.
    pub fn is_on_surface(self) -> bool {
        matches!(self, Situation::Landed | Situation::Splashed | Situation::Prelaunch)
    }

    /// Whether the vessel is on a closed or open orbit that only collides with
    /// the surface if its periapsis lies beneath it.
    pub fn is_orbital(self) -> bool { matches!(self, Situation::Orbiting | Situation::Escaping) }
}

impl From<&str> for Situation {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "landed" => Situation::Landed,
            "splashed" => Situation::Splashed,
            "prelaunch" => Situation::Prelaunch,
            "flying" => Situation::Flying,
            "sub_orbital" | "suborbital" => Situation::SubOrbital,
            "orbiting" => Situation::Orbiting,
            "escaping" => Situation::Escaping,
            // unknown categories are never fed into the impact estimator
            _ => Situation::Docked,
        }
    }
}

impl From<Situation> for &'static str {
    fn from(value: Situation) -> Self {
        match value {
            Situation::Landed => "landed",
            Situation::Splashed => "splashed",
            Situation::Prelaunch => "prelaunch",
            Situation::Flying => "flying",
            Situation::SubOrbital => "sub_orbital",
            Situation::Orbiting => "orbiting",
            Situation::Escaping => "escaping",
            Situation::Docked => "docked",
        }
    }
}
