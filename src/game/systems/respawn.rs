//! Death-to-respawn scheduling.
//!
//! The tank reports its own death; scheduling the comeback is a roster-level
//! decision made here. Each dead tank gets its respawn gate armed exactly
//! once, and every step polls the gates instead of suspending on them.

use crate::config::SimConfig;
use crate::game::events::GameEvent;
use crate::game::state::{GameState, TankId};
use crate::game::systems::health;

/// Arm gates for freshly dead tanks and revive the ones whose gate expired.
pub fn update(state: &mut GameState, config: &SimConfig) -> Vec<GameEvent> {
    let clock = state.clock;
    let mut events = Vec::new();

    let mut due: Vec<TankId> = Vec::new();
    for tank in state.tanks.values_mut() {
        if tank.alive {
            continue;
        }
        if !tank.respawn_timer.is_running() {
            // Death happened since the last step; schedule the comeback
            tank.respawn_timer = clock.timer_from_secs(config.respawn_delay_secs);
        } else if tank.respawn_timer.expired(&clock) {
            due.push(tank.id);
        }
    }

    due.sort_unstable();
    for id in due {
        events.extend(health::respawn(state, id));
    }

    events
}
