//! The remote-request boundary.
//!
//! Non-authoritative participants never mutate state directly: they submit
//! `Command` values which the authority validates on receipt and applies at
//! the start of its next step. Duplicate delivery is tolerated because the
//! underlying health operations are idempotent against dead targets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::events::GameEvent;
use crate::game::state::{GameState, TankId};
use crate::game::systems::health;

/// A mutation request from any participant, applied only by the authority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Apply damage to a tank
    Damage { target: TankId, amount: f32 },
    /// Heal a tank
    Heal { target: TankId, amount: f32 },
}

/// Rejection reasons surfaced at the call boundary, before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CommandError {
    #[error("damage amount must be non-negative, got {0}")]
    NegativeDamage(f32),
    #[error("heal amount must be non-negative, got {0}")]
    NegativeHeal(f32),
    #[error("explosion radius must be positive, got {0}")]
    NonPositiveRadius(f32),
}

impl Command {
    /// Reject out-of-range numeric input up front rather than clamping it
    /// silently, so caller bugs surface during testing.
    pub fn validate(&self) -> Result<(), CommandError> {
        match *self {
            Command::Damage { amount, .. } if amount < 0.0 => {
                Err(CommandError::NegativeDamage(amount))
            }
            Command::Heal { amount, .. } if amount < 0.0 => Err(CommandError::NegativeHeal(amount)),
            _ => Ok(()),
        }
    }
}

/// Apply a validated command. A target that no longer exists is a silent
/// no-op: entities routinely despawn between queueing and application.
pub fn apply(state: &mut GameState, command: Command) -> Vec<GameEvent> {
    match command {
        Command::Damage { target, amount } => health::apply_damage(state, target, amount, None),
        Command::Heal { target, amount } => health::heal(state, target, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Tank;
    use crate::util::vec3::Vec3;
    use uuid::Uuid;

    fn state_with_tank() -> (GameState, TankId) {
        let mut state = GameState::new();
        let tank = Tank::new(Uuid::new_v4(), "Test".to_string(), Vec3::ZERO);
        let id = tank.id;
        state.add_tank(tank);
        (state, id)
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let target = Uuid::new_v4();
        let damage = Command::Damage {
            target,
            amount: -5.0,
        };
        assert_eq!(damage.validate(), Err(CommandError::NegativeDamage(-5.0)));

        let heal = Command::Heal {
            target,
            amount: -0.5,
        };
        assert_eq!(heal.validate(), Err(CommandError::NegativeHeal(-0.5)));
    }

    #[test]
    fn test_valid_commands_pass() {
        let target = Uuid::new_v4();
        assert!(Command::Damage { target, amount: 0.0 }.validate().is_ok());
        assert!(Command::Heal {
            target,
            amount: 40.0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_apply_damage_command() {
        let (mut state, id) = state_with_tank();
        let events = apply(
            &mut state,
            Command::Damage {
                target: id,
                amount: 30.0,
            },
        );
        assert_eq!(state.get_tank(id).unwrap().health, 70.0);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::HealthChanged { health, .. } if *health == 70.0)));
    }

    #[test]
    fn test_missing_target_is_silent_noop() {
        let mut state = GameState::new();
        let events = apply(
            &mut state,
            Command::Damage {
                target: Uuid::new_v4(),
                amount: 10.0,
            },
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_duplicate_delivery_after_death_is_noop() {
        let (mut state, id) = state_with_tank();
        let kill = Command::Damage {
            target: id,
            amount: 150.0,
        };
        let first = apply(&mut state, kill);
        assert!(first
            .iter()
            .any(|e| matches!(e, GameEvent::TankDied { .. })));

        let second = apply(&mut state, kill);
        assert!(second.is_empty(), "re-delivery must not re-fire death");
        assert_eq!(state.get_tank(id).unwrap().health, 0.0);
    }
}
