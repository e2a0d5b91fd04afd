//! Area-damage resolution.
//!
//! An explosion consumes its candidate set in a single pass: falloff damage
//! by distance from the center, applied at most once per tank even when the
//! overlap set reports duplicates. The terminal explosion effect fires
//! exactly once per detonation whether or not anything was hit.

use smallvec::SmallVec;

use crate::game::commands::CommandError;
use crate::game::events::GameEvent;
use crate::game::state::{GameState, TankId};
use crate::game::systems::health;
use crate::util::vec3::Vec3;

/// One detonation, validated at construction so the falloff formula can
/// never divide by zero.
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub center: Vec3,
    pub radius: f32,
    pub max_damage: f32,
    /// Tank credited with kills from this explosion
    pub source: Option<TankId>,
}

impl Explosion {
    pub fn new(
        center: Vec3,
        radius: f32,
        max_damage: f32,
        source: Option<TankId>,
    ) -> Result<Self, CommandError> {
        if radius <= 0.0 {
            return Err(CommandError::NonPositiveRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            max_damage,
            source,
        })
    }
}

/// Damage for a target at the given distance from the explosion center.
/// Full damage at the center, zero at the radius and beyond, never negative.
#[inline]
pub fn falloff_damage(distance: f32, radius: f32, max_damage: f32) -> f32 {
    let relative = ((radius - distance) / radius).clamp(0.0, 1.0);
    relative * max_damage
}

/// Resolve an explosion against the candidate set reported by the spatial
/// collaborator. Candidates with no resolvable tank are skipped. Returns the
/// per-target health events plus exactly one `ShellExploded`.
pub fn resolve(state: &mut GameState, explosion: &Explosion, candidates: &[TankId]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut hit: SmallVec<[TankId; 8]> = SmallVec::new();

    for &target in candidates {
        if hit.contains(&target) {
            continue;
        }
        hit.push(target);

        let Some(tank) = state.get_tank(target) else {
            continue;
        };
        let distance = tank.position.distance_to(explosion.center);
        let damage = falloff_damage(distance, explosion.radius, explosion.max_damage);
        events.extend(health::apply_damage(state, target, damage, explosion.source));
    }

    events.push(GameEvent::ShellExploded {
        position: explosion.center,
    });
    events
}
