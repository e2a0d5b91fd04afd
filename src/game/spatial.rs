//! The spatial-query seam.
//!
//! Overlap detection is an external collaborator's concern: explosions and
//! pickup contacts only consume the resulting candidate sets. The trait keeps
//! that boundary explicit; the brute-force implementation covers the
//! headless server and tests, where the tank count is small.

use crate::game::state::{GameState, TankId};
use crate::util::vec3::Vec3;

/// Supplies the set of collidable tanks overlapping a sphere. An empty
/// result is valid; candidates may contain stale ids the caller must skip.
pub trait SpatialQuery {
    fn overlap_sphere(&self, state: &GameState, center: Vec3, radius: f32) -> Vec<TankId>;
}

/// Distance scan over the tank table. Dead tanks carry no collider and are
/// never reported. Results are sorted by id so resolution order is
/// deterministic across participants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceOverlap;

impl SpatialQuery for BruteForceOverlap {
    fn overlap_sphere(&self, state: &GameState, center: Vec3, radius: f32) -> Vec<TankId> {
        let radius_sq = radius * radius;
        let mut hits: Vec<TankId> = state
            .tanks
            .values()
            .filter(|tank| tank.alive)
            .filter(|tank| tank.position.distance_sq_to(center) <= radius_sq)
            .map(|tank| tank.id)
            .collect();
        hits.sort_unstable();
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Tank;
    use uuid::Uuid;

    fn add_tank_at(state: &mut GameState, position: Vec3) -> TankId {
        let tank = Tank::new(Uuid::new_v4(), "T".to_string(), position);
        let id = tank.id;
        state.add_tank(tank);
        id
    }

    #[test]
    fn test_overlap_includes_tanks_in_radius() {
        let mut state = GameState::new();
        let near = add_tank_at(&mut state, Vec3::new(2.0, 0.0, 0.0));
        let far = add_tank_at(&mut state, Vec3::new(50.0, 0.0, 0.0));

        let hits = BruteForceOverlap.overlap_sphere(&state, Vec3::ZERO, 5.0);
        assert!(hits.contains(&near));
        assert!(!hits.contains(&far));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut state = GameState::new();
        let edge = add_tank_at(&mut state, Vec3::new(5.0, 0.0, 0.0));

        let hits = BruteForceOverlap.overlap_sphere(&state, Vec3::ZERO, 5.0);
        assert!(hits.contains(&edge));
    }

    #[test]
    fn test_dead_tanks_have_no_collider() {
        let mut state = GameState::new();
        let id = add_tank_at(&mut state, Vec3::ZERO);
        let tank = state.get_tank_mut(id).unwrap();
        tank.alive = false;
        tank.health = 0.0;

        let hits = BruteForceOverlap.overlap_sphere(&state, Vec3::ZERO, 5.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_world_is_valid() {
        let state = GameState::new();
        let hits = BruteForceOverlap.overlap_sphere(&state, Vec3::ZERO, 100.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_results_are_sorted() {
        let mut state = GameState::new();
        for i in 0..6 {
            add_tank_at(&mut state, Vec3::new(i as f32 * 0.1, 0.0, 0.0));
        }
        let hits = BruteForceOverlap.overlap_sphere(&state, Vec3::ZERO, 5.0);
        let mut sorted = hits.clone();
        sorted.sort_unstable();
        assert_eq!(hits, sorted);
    }
}
