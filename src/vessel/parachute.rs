use crate::event;
use strum_macros::Display;

/// Deployment state of a single parachute module.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, serde::Serialize, serde::Deserialize)]
pub enum ParachuteState {
    Stowed,
    /// Staged and waiting for its deployment conditions.
    Armed,
    /// Partially open (semi-deployed).
    Deploying,
    Deployed,
    Cut,
}

impl ParachuteState {
    /// Whether a chute in this state is going to, or already does, slow the vessel.
    pub fn is_active(self) -> bool {
        matches!(self, ParachuteState::Armed | ParachuteState::Deploying | ParachuteState::Deployed)
    }
}

/// Live view on a parachute module of the active vessel.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParachuteRef {
    pub state: ParachuteState,
    /// Configured full-deployment height above terrain in meters.
    pub deploy_altitude: f64,
}

/// Access to the parts of the active vessel, provided by the host.
pub trait PartList {
    /// Identity of the vessel the parts belong to.
    fn vessel_id(&self) -> u64;
    fn part_count(&self) -> usize;
    /// The parachute module of the part at `index`, `None` if it carries none.
    fn parachute(&self, index: usize) -> Option<ParachuteRef>;
}

/// Highest deployment altitude among active parachutes, zero if none is active.
pub fn activation_altitude<'a>(chutes: impl IntoIterator<Item = &'a ParachuteRef>) -> f64 {
    chutes
        .into_iter()
        .filter(|chute| chute.state.is_active())
        .map(|chute| chute.deploy_altitude)
        .fold(0.0, f64::max)
}

/// Incremental cache of parachute-bearing part indices.
///
/// Scanning every part is `O(part count)`, so the index list is only rebuilt when
/// the vessel identity or its part count differ from the cached key. Deployment
/// states are always read live through the [`PartList`].
#[derive(Debug, Default)]
pub struct ParachuteCache {
    key: Option<(u64, usize)>,
    indices: Vec<usize>,
}

impl ParachuteCache {
    pub fn new() -> Self { Self::default() }

    /// Drops the cached index list; the next access rescans the vessel.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.indices.clear();
    }

    fn refresh(&mut self, parts: &dyn PartList) {
        let key = (parts.vessel_id(), parts.part_count());
        if self.key == Some(key) {
            return;
        }
        self.indices = (0..key.1).filter(|i| parts.parachute(*i).is_some()).collect();
        self.key = Some(key);
        event!(
            "Parachute cache rebuilt for vessel {}: {} chutes in {} parts",
            key.0,
            self.indices.len(),
            key.1
        );
    }

    /// Current state of every cached parachute, rebuilding the cache first if needed.
    pub fn parachutes(&mut self, parts: &dyn PartList) -> Vec<ParachuteRef> {
        self.refresh(parts);
        self.indices.iter().filter_map(|i| parts.parachute(*i)).collect()
    }

    pub fn cached_len(&self) -> usize { self.indices.len() }

    pub fn is_valid_for(&self, parts: &dyn PartList) -> bool {
        self.key == Some((parts.vessel_id(), parts.part_count()))
    }
}
