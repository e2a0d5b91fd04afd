//! Game state definitions and structures
//!
//! Contains all entities (tanks, shells, pickups) plus the roster and the
//! shared tick clock. Only the authoritative participant mutates this state,
//! and only through the operations in `game::systems`.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::clock::{TickClock, TickTimer};
use crate::game::constants::{health, shell, sim};
use crate::game::roster::Roster;
use crate::util::vec3::Vec3;

/// Unique tank identifier
pub type TankId = Uuid;

/// Entity identifier for non-tank entities (shells, pickups)
pub type EntityId = u64;

/// One combat entity.
///
/// `alive` is kept in sync explicitly by the health system rather than being
/// derived from `health`, so the alive→dead transition happens exactly once
/// per death. Invariants: `!alive` implies `health == 0`; `alive` implies
/// `health > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    /// Tank position in world space
    pub position: Vec3,
    /// Current health, clamped to `[0, max_health]`
    pub health: f32,
    /// Health ceiling; also the spawn/respawn value
    pub max_health: f32,
    /// Whether the tank is alive (dead tanks are skipped by camera framing)
    pub alive: bool,
    /// Respawn gate, armed once per death by the respawn system
    pub respawn_timer: TickTimer,
    /// Number of kills
    pub kills: u32,
    /// Number of deaths
    pub deaths: u32,
    /// Unique tank identifier
    pub id: TankId,
    /// Display name
    pub name: String,
}

impl Tank {
    pub fn new(id: TankId, name: String, position: Vec3) -> Self {
        Self {
            position,
            health: health::STARTING,
            max_health: health::STARTING,
            alive: true,
            respawn_timer: TickTimer::NONE,
            kills: 0,
            deaths: 0,
            id,
            name,
        }
    }

    /// Active for camera framing and contact checks
    #[inline]
    pub fn is_active(&self) -> bool {
        self.alive
    }
}

/// A fired shell. Lives until contact or its lifetime timer expires, then
/// detonates exactly once and is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    pub id: EntityId,
    pub owner: TankId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Lifetime gate; expiry detonates the shell in place
    pub max_life: TickTimer,
    pub max_damage: f32,
    pub radius: f32,
}

/// A health-pack pickup. `present == true` implies the timer is not running;
/// while absent the timer counts toward reappearance at the same position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: EntityId,
    pub position: Vec3,
    pub present: bool,
    pub respawn_timer: TickTimer,
}

impl Pickup {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            present: true,
            respawn_timer: TickTimer::NONE,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub clock: TickClock,
    pub tanks: HashMap<TankId, Tank>,
    pub roster: Roster,
    pub shells: Vec<Shell>,
    pub pickups: Vec<Pickup>,
    /// Gate for the periodic world pickup drop
    pub pickup_spawn_timer: TickTimer,
    next_entity_id: EntityId,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            clock: TickClock::new(sim::TICK_RATE),
            tanks: HashMap::new(),
            roster: Roster::new(),
            shells: Vec::new(),
            pickups: Vec::new(),
            pickup_spawn_timer: TickTimer::NONE,
            next_entity_id: 0,
        }
    }

    /// Generate a new unique entity ID
    pub fn alloc_entity_id(&mut self) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }

    pub fn get_tank(&self, id: TankId) -> Option<&Tank> {
        self.tanks.get(&id)
    }

    pub fn get_tank_mut(&mut self, id: TankId) -> Option<&mut Tank> {
        self.tanks.get_mut(&id)
    }

    /// Add a tank and give it a roster slot
    pub fn add_tank(&mut self, tank: Tank) {
        self.roster.add(tank.id);
        self.tanks.insert(tank.id, tank);
    }

    /// Remove a tank and free its roster slot
    pub fn remove_tank(&mut self, id: TankId) -> Option<Tank> {
        self.roster.remove(id);
        self.tanks.remove(&id)
    }

    /// All alive tanks
    pub fn alive_tanks(&self) -> impl Iterator<Item = &Tank> {
        self.tanks.values().filter(|t| t.alive)
    }

    /// Count alive tanks
    pub fn alive_count(&self) -> usize {
        self.tanks.values().filter(|t| t.alive).count()
    }

    /// Spawn a shell with the standard explosion parameters
    pub fn spawn_shell(
        &mut self,
        owner: TankId,
        position: Vec3,
        velocity: Vec3,
        max_life: TickTimer,
    ) -> EntityId {
        let id = self.alloc_entity_id();
        self.shells.push(Shell {
            id,
            owner,
            position,
            velocity,
            max_life,
            max_damage: shell::MAX_DAMAGE,
            radius: shell::EXPLOSION_RADIUS,
        });
        id
    }

    /// Spawn a present pickup at the given position
    pub fn spawn_pickup(&mut self, position: Vec3) -> EntityId {
        let id = self.alloc_entity_id();
        self.pickups.push(Pickup::new(id, position));
        id
    }

    /// Positions of the tanks the camera should frame, in roster-slot order
    pub fn framing_targets(&self) -> Vec<Vec3> {
        self.roster.active_positions(&self.tanks)
    }
}
