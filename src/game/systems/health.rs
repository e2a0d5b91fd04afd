//! Authoritative health and lifecycle operations.
//!
//! These are the only code paths that mutate a tank's health or alive flag.
//! Remote participants reach them through the command queue; the explosion
//! resolver and pickup system call them directly on the authority.

use tracing::debug;

use crate::game::events::GameEvent;
use crate::game::state::{GameState, TankId};

/// Drain health, clamped at zero. Crossing to zero kills the tank and fires
/// the death notification exactly once; damaging an already-dead tank is a
/// no-op so duplicate delivery can never re-fire it or go negative.
///
/// `amount` is assumed non-negative; negative input is rejected upstream at
/// the command boundary. `source` receives kill credit when it differs from
/// the target.
pub fn apply_damage(
    state: &mut GameState,
    target: TankId,
    amount: f32,
    source: Option<TankId>,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let Some(tank) = state.get_tank_mut(target) else {
        return events;
    };
    if !tank.alive {
        return events;
    }

    tank.health = (tank.health - amount).max(0.0);
    events.push(GameEvent::HealthChanged {
        tank: target,
        health: tank.health,
    });

    if tank.health == 0.0 {
        tank.alive = false;
        tank.deaths += 1;
        let position = tank.position;
        debug!(tank = %tank.name, "tank destroyed");
        events.push(GameEvent::TankDied {
            tank: target,
            position,
            killer: source.filter(|killer| *killer != target),
        });

        if let Some(killer) = source.filter(|killer| *killer != target) {
            if let Some(killer_tank) = state.get_tank_mut(killer) {
                killer_tank.kills += 1;
            }
        }
    }

    events
}

/// Restore health, clamped at the tank's maximum. Healing a dead tank is a
/// complete no-op: revival only happens through [`respawn`].
pub fn heal(state: &mut GameState, target: TankId, amount: f32) -> Vec<GameEvent> {
    let Some(tank) = state.get_tank_mut(target) else {
        return Vec::new();
    };
    if !tank.alive {
        return Vec::new();
    }

    tank.health = (tank.health + amount).min(tank.max_health);
    vec![GameEvent::HealthChanged {
        tank: target,
        health: tank.health,
    }]
}

/// Bring a dead tank back at full health and clear its respawn gate. Only
/// the respawn system calls this, after the death-delay protocol completes.
pub fn respawn(state: &mut GameState, target: TankId) -> Vec<GameEvent> {
    let Some(tank) = state.get_tank_mut(target) else {
        return Vec::new();
    };

    tank.health = tank.max_health;
    tank.alive = true;
    tank.respawn_timer = crate::game::clock::TickTimer::NONE;
    debug!(tank = %tank.name, "tank respawned");

    vec![
        GameEvent::HealthChanged {
            tank: target,
            health: tank.max_health,
        },
        GameEvent::TankRespawned { tank: target },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::health::STARTING;
    use crate::game::state::Tank;
    use crate::util::vec3::Vec3;
    use uuid::Uuid;

    fn state_with_tank() -> (GameState, TankId) {
        let mut state = GameState::new();
        let tank = Tank::new(Uuid::new_v4(), "Test".to_string(), Vec3::new(3.0, 0.0, 4.0));
        let id = tank.id;
        state.add_tank(tank);
        (state, id)
    }

    #[test]
    fn test_damage_subtracts_health() {
        let (mut state, id) = state_with_tank();
        let events = apply_damage(&mut state, id, 25.0, None);

        let tank = state.get_tank(id).unwrap();
        assert_eq!(tank.health, 75.0);
        assert!(tank.alive);
        assert_eq!(
            events,
            vec![GameEvent::HealthChanged {
                tank: id,
                health: 75.0
            }]
        );
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let (mut state, id) = state_with_tank();
        apply_damage(&mut state, id, 250.0, None);
        assert_eq!(state.get_tank(id).unwrap().health, 0.0);
    }

    #[test]
    fn test_lethal_damage_kills_and_fires_death_once() {
        let (mut state, id) = state_with_tank();
        let position = state.get_tank(id).unwrap().position;

        let events = apply_damage(&mut state, id, STARTING, None);
        assert!(!state.get_tank(id).unwrap().alive);
        assert!(events.contains(&GameEvent::TankDied {
            tank: id,
            position,
            killer: None
        }));

        // Re-entrant damage after death: no events, no negative health
        let events = apply_damage(&mut state, id, 50.0, None);
        assert!(events.is_empty());
        assert_eq!(state.get_tank(id).unwrap().health, 0.0);
        assert_eq!(state.get_tank(id).unwrap().deaths, 1);
    }

    #[test]
    fn test_kill_credit_goes_to_source() {
        let (mut state, victim) = state_with_tank();
        let killer = Tank::new(Uuid::new_v4(), "Killer".to_string(), Vec3::ZERO);
        let killer_id = killer.id;
        state.add_tank(killer);

        let events = apply_damage(&mut state, victim, STARTING, Some(killer_id));
        assert_eq!(state.get_tank(killer_id).unwrap().kills, 1);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::TankDied { killer: Some(k), .. } if *k == killer_id
        )));
    }

    #[test]
    fn test_self_kill_gets_no_credit() {
        let (mut state, id) = state_with_tank();
        let events = apply_damage(&mut state, id, STARTING, Some(id));

        assert_eq!(state.get_tank(id).unwrap().kills, 0);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::TankDied { killer: None, .. })));
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let (mut state, id) = state_with_tank();
        apply_damage(&mut state, id, 30.0, None);

        let events = heal(&mut state, id, 40.0);
        assert_eq!(state.get_tank(id).unwrap().health, STARTING);
        assert_eq!(
            events,
            vec![GameEvent::HealthChanged {
                tank: id,
                health: STARTING
            }]
        );
    }

    #[test]
    fn test_heal_does_not_revive() {
        let (mut state, id) = state_with_tank();
        apply_damage(&mut state, id, STARTING, None);

        let events = heal(&mut state, id, 40.0);
        let tank = state.get_tank(id).unwrap();
        assert!(events.is_empty());
        assert!(!tank.alive);
        assert_eq!(tank.health, 0.0, "a corpse keeps zero health");
    }

    #[test]
    fn test_missing_tank_is_noop() {
        let mut state = GameState::new();
        assert!(apply_damage(&mut state, Uuid::new_v4(), 10.0, None).is_empty());
        assert!(heal(&mut state, Uuid::new_v4(), 10.0).is_empty());
        assert!(respawn(&mut state, Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_respawn_restores_full_health() {
        let (mut state, id) = state_with_tank();
        apply_damage(&mut state, id, STARTING, None);
        state.get_tank_mut(id).unwrap().respawn_timer = state.clock.timer_after(1);

        let events = respawn(&mut state, id);
        let tank = state.get_tank(id).unwrap();
        assert!(tank.alive);
        assert_eq!(tank.health, STARTING);
        assert!(!tank.respawn_timer.is_running());
        assert!(events.contains(&GameEvent::TankRespawned { tank: id }));
    }
}
