//! The authoritative set of tanks considered for camera framing.
//!
//! Slots are stable: a dead tank keeps its slot and is merely skipped when
//! collecting framing targets. Slots are only freed on explicit despawn.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::game::state::{Tank, TankId};
use crate::util::vec3::Vec3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    slots: Vec<TankId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tank. Idempotent: re-adding a present tank is a no-op.
    /// Returns true if the roster changed.
    pub fn add(&mut self, id: TankId) -> bool {
        if self.slots.contains(&id) {
            return false;
        }
        self.slots.push(id);
        true
    }

    /// Remove a tank. Idempotent: removing an absent tank is a no-op.
    /// Returns true if the roster changed.
    pub fn remove(&mut self, id: TankId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| *slot != id);
        self.slots.len() != before
    }

    pub fn contains(&self, id: TankId) -> bool {
        self.slots.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TankId> + '_ {
        self.slots.iter().copied()
    }

    /// Positions of active (alive) roster members, in slot order. Slots whose
    /// tank has despawned or is dead are skipped, not errored.
    pub fn active_positions(&self, tanks: &HashMap<TankId, Tank>) -> Vec<Vec3> {
        self.slots
            .iter()
            .filter_map(|id| tanks.get(id))
            .filter(|tank| tank.is_active())
            .map(|tank| tank.position)
            .collect()
    }
}
