//! Health-pack pickup cycle and the periodic world spawner.
//!
//! A present pickup scans for contact; on a valid contact with a living tank
//! it heals once, despawns, and arms its reappearance timer. While absent no
//! contact checks run at all. On expiry a fresh pickup instance appears at
//! the original position.

use rand::Rng;
use tracing::debug;

use crate::config::SimConfig;
use crate::game::clock::TickTimer;
use crate::game::events::GameEvent;
use crate::game::spatial::SpatialQuery;
use crate::game::state::GameState;
use crate::game::systems::health;
use crate::util::vec3::Vec3;

/// Advance the pickup cycle one step.
pub fn update(
    state: &mut GameState,
    config: &SimConfig,
    spatial: &dyn SpatialQuery,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    events.extend(spawn_world_pickup(state, config));

    for index in 0..state.pickups.len() {
        let (present, position, timer) = {
            let pickup = &state.pickups[index];
            (pickup.present, pickup.position, pickup.respawn_timer)
        };

        if present {
            let hits = spatial.overlap_sphere(state, position, config.pickup_contact_radius);
            let collector = hits
                .into_iter()
                .find(|id| state.get_tank(*id).is_some_and(|tank| tank.alive));
            if let Some(tank_id) = collector {
                events.extend(health::heal(state, tank_id, config.pickup_heal));

                let deadline = state.clock.timer_from_secs(config.pickup_respawn_delay_secs);
                let pickup = &mut state.pickups[index];
                pickup.present = false;
                pickup.respawn_timer = deadline;
                debug!(pickup = pickup.id, tank = %tank_id, "pickup collected");
                events.push(GameEvent::PickupCollected {
                    pickup: pickup.id,
                    tank: tank_id,
                });
            }
        } else if timer.expired_or_not_running(&state.clock) {
            // A fresh instance at the original position
            let id = state.alloc_entity_id();
            let pickup = &mut state.pickups[index];
            pickup.id = id;
            pickup.present = true;
            pickup.respawn_timer = TickTimer::NONE;
            events.push(GameEvent::PickupSpawned {
                pickup: id,
                position,
            });
        }
    }

    events
}

/// Drop a new pickup at a random position inside the spawn area whenever the
/// world spawn gate expires, then re-arm it.
fn spawn_world_pickup(state: &mut GameState, config: &SimConfig) -> Option<GameEvent> {
    if !state.pickup_spawn_timer.expired_or_not_running(&state.clock) {
        return None;
    }
    state.pickup_spawn_timer = state.clock.timer_from_secs(config.pickup_spawn_interval_secs);

    let mut rng = rand::thread_rng();
    let position = Vec3::new(
        rng.gen_range(config.pickup_area_min.x..config.pickup_area_max.x),
        0.0,
        rng.gen_range(config.pickup_area_min.z..config.pickup_area_max.z),
    );
    let id = state.spawn_pickup(position);
    debug!(pickup = id, ?position, "pickup dropped");

    Some(GameEvent::PickupSpawned {
        pickup: id,
        position,
    })
}
