//! Shell firing and lifetime management.
//!
//! A shell detonates exactly once: either when the physics collaborator
//! reports a contact, or when its lifetime timer expires. Both paths remove
//! the shell before resolving the explosion, so a contact report arriving
//! for an already-detonated shell is a silent no-op.

use tracing::debug;

use crate::game::constants::{launch_speed, shell as shell_constants, sim};
use crate::game::events::GameEvent;
use crate::game::spatial::SpatialQuery;
use crate::game::state::{EntityId, GameState, Shell, TankId};
use crate::game::systems::explosion::{self, Explosion};
use crate::util::vec3::Vec3;

/// Fire a shell from a tank. `charge` in `[0, 1]` scales the launch speed
/// between the minimum and maximum launch force. Dead tanks cannot fire.
pub fn fire(
    state: &mut GameState,
    owner: TankId,
    direction: Vec3,
    charge: f32,
) -> Option<GameEvent> {
    let tank = state.get_tank(owner)?;
    if !tank.alive {
        return None;
    }

    let direction = direction.normalize();
    if direction == Vec3::ZERO {
        return None;
    }

    let position = tank.position + direction * shell_constants::MUZZLE_OFFSET;
    let velocity = direction * launch_speed(charge);
    let max_life = state.clock.timer_from_secs(shell_constants::LIFETIME_SECS);

    let shell = state.spawn_shell(owner, position, velocity, max_life);
    debug!(%owner, shell, "shell fired");

    Some(GameEvent::ShellFired { shell, owner })
}

/// Advance shells one step and detonate the ones whose lifetime expired.
///
/// Shells fly straight; proper ballistics belong to the physics
/// collaborator, this advance only keeps the expiry detonation positioned.
pub fn update(state: &mut GameState, spatial: &dyn SpatialQuery) -> Vec<GameEvent> {
    for shell in &mut state.shells {
        shell.position += shell.velocity * sim::DT;
    }

    let clock = state.clock;
    let mut events = Vec::new();
    let mut index = 0;
    while index < state.shells.len() {
        if state.shells[index].max_life.expired(&clock) {
            let shell = state.shells.remove(index);
            events.extend(detonate(state, shell, spatial));
        } else {
            index += 1;
        }
    }
    events
}

/// Detonate a shell on contact, as reported by the physics collaborator.
/// Unknown ids are ignored: the shell may have detonated this same step.
pub fn report_contact(
    state: &mut GameState,
    shell_id: EntityId,
    spatial: &dyn SpatialQuery,
) -> Vec<GameEvent> {
    let Some(index) = state.shells.iter().position(|s| s.id == shell_id) else {
        return Vec::new();
    };
    let shell = state.shells.remove(index);
    detonate(state, shell, spatial)
}

fn detonate(state: &mut GameState, shell: Shell, spatial: &dyn SpatialQuery) -> Vec<GameEvent> {
    let candidates = spatial.overlap_sphere(state, shell.position, shell.radius);

    // Radius comes from fire-time constants and is always positive
    let Ok(explosion) = Explosion::new(
        shell.position,
        shell.radius,
        shell.max_damage,
        Some(shell.owner),
    ) else {
        return Vec::new();
    };

    explosion::resolve(state, &explosion, &candidates)
}
