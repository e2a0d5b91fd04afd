//! Notifications emitted by the simulation for presentation collaborators.
//!
//! Events are fire-and-forget values: audio, VFX, and UI layers consume them
//! after each step; the simulation never reads them back.

use serde::{Deserialize, Serialize};

use crate::game::state::{EntityId, TankId};
use crate::util::vec3::Vec3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tank joined the session and took a roster slot
    TankJoined { tank: TankId },
    /// A tank left the session and freed its slot
    TankLeft { tank: TankId },
    /// A tank's health changed (UI refresh hook)
    HealthChanged { tank: TankId, health: f32 },
    /// A tank died. Fired at most once per death.
    TankDied {
        tank: TankId,
        position: Vec3,
        killer: Option<TankId>,
    },
    /// A dead tank's respawn gate expired and it is alive again
    TankRespawned { tank: TankId },
    /// A shell was fired
    ShellFired { shell: EntityId, owner: TankId },
    /// A shell detonated. Fired exactly once per shell, hit or miss.
    ShellExploded { position: Vec3 },
    /// A pickup appeared in the world
    PickupSpawned { pickup: EntityId, position: Vec3 },
    /// A pickup was collected by a tank
    PickupCollected { pickup: EntityId, tank: TankId },
}
