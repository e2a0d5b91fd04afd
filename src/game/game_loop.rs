//! Fixed-order step orchestration.
//!
//! One authoritative participant owns a [`Simulation`] and advances it once
//! per fixed step. Remote requests and contact reports queue between steps;
//! each step drains them in arrival order, runs every system in a fixed
//! sequence, and reframes the camera from the resulting roster. All events
//! produced since the previous step are returned for presentation.

use tracing::info;

use crate::config::SimConfig;
use crate::game::camera::CameraRig;
use crate::game::commands::{self, Command, CommandError};
use crate::game::constants::sim;
use crate::game::events::GameEvent;
use crate::game::spatial::{BruteForceOverlap, SpatialQuery};
use crate::game::state::{EntityId, GameState, Tank, TankId};
use crate::game::systems::{pickup, respawn, shell};
use crate::util::vec3::Vec3;

pub struct Simulation {
    pub state: GameState,
    pub camera: CameraRig,
    config: SimConfig,
    spatial: Box<dyn SpatialQuery + Send>,
    pending_commands: Vec<Command>,
    pending_events: Vec<GameEvent>,
}

impl Simulation {
    /// Simulation with the built-in brute-force overlap scan.
    pub fn new(config: SimConfig) -> Self {
        Self::with_spatial(config, Box::new(BruteForceOverlap))
    }

    /// Simulation with an injected spatial-query collaborator.
    pub fn with_spatial(config: SimConfig, spatial: Box<dyn SpatialQuery + Send>) -> Self {
        let camera = CameraRig::new(&config);
        Self {
            state: GameState::new(),
            camera,
            config,
            spatial,
            pending_commands: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Add a tank to the session and give it a roster slot.
    pub fn join(&mut self, name: &str, position: Vec3) -> TankId {
        let tank = Tank::new(uuid::Uuid::new_v4(), name.to_string(), position);
        let id = tank.id;
        info!(tank = %id, name, "tank joined");
        self.state.add_tank(tank);
        self.pending_events.push(GameEvent::TankJoined { tank: id });
        id
    }

    /// Remove a tank and free its roster slot, alive or dead.
    pub fn leave(&mut self, id: TankId) -> bool {
        if self.state.remove_tank(id).is_none() {
            return false;
        }
        info!(tank = %id, "tank left");
        self.pending_events.push(GameEvent::TankLeft { tank: id });
        true
    }

    /// Queue a remote mutation request. Validation happens here, before
    /// anything is queued; the mutation itself runs on the next step.
    pub fn submit(&mut self, command: Command) -> Result<(), CommandError> {
        command.validate()?;
        self.pending_commands.push(command);
        Ok(())
    }

    /// Fire a shell from a tank. Returns the shell id, or `None` when the
    /// tank is missing, dead, or the direction is degenerate.
    pub fn fire(&mut self, owner: TankId, direction: Vec3, charge: f32) -> Option<EntityId> {
        let event = shell::fire(&mut self.state, owner, direction, charge)?;
        let GameEvent::ShellFired { shell, .. } = event else {
            return None;
        };
        self.pending_events.push(event);
        Some(shell)
    }

    /// Contact report from the physics collaborator: detonate now.
    pub fn report_shell_contact(&mut self, shell_id: EntityId) {
        let events = shell::report_contact(&mut self.state, shell_id, &*self.spatial);
        self.pending_events.extend(events);
    }

    /// Snap the camera to the current roster with no smoothing animation.
    pub fn initialize_camera(&mut self) {
        let targets = self.state.framing_targets();
        self.camera.initialize(&targets);
    }

    /// Advance one fixed step: clock, queued requests, shell lifetimes and
    /// detonations, the pickup cycle, respawn gates, then camera framing.
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending_events);

        self.state.clock.advance();

        for command in std::mem::take(&mut self.pending_commands) {
            events.extend(commands::apply(&mut self.state, command));
        }

        events.extend(shell::update(&mut self.state, &*self.spatial));
        events.extend(pickup::update(&mut self.state, &self.config, &*self.spatial));
        events.extend(respawn::update(&mut self.state, &self.config));

        let targets = self.state.framing_targets();
        self.camera.update(&targets, sim::DT);

        events
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
