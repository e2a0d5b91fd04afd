/// Simulation timing constants
pub mod sim {
    /// Server tick rate in Hz
    pub const TICK_RATE: u32 = 30;
    /// Delta time per tick in seconds
    pub const DT: f32 = 1.0 / 30.0;
    /// Tick duration in milliseconds
    pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE as u64;
}

/// Tank health constants
pub mod health {
    /// Health a tank spawns and respawns with
    pub const STARTING: f32 = 100.0;
}

/// Shell (projectile) constants
pub mod shell {
    /// Maximum damage at the explosion center
    pub const MAX_DAMAGE: f32 = 100.0;
    /// Radius within which explosion damage is applied
    pub const EXPLOSION_RADIUS: f32 = 5.0;
    /// Launch speed for an uncharged shot
    pub const MIN_LAUNCH_FORCE: f32 = 15.0;
    /// Launch speed for a fully charged shot
    pub const MAX_LAUNCH_FORCE: f32 = 30.0;
    /// Time to charge from minimum to maximum launch force, in seconds.
    /// The input layer owns the ramp; the firing operation takes the
    /// resulting charge fraction.
    pub const MAX_CHARGE_TIME: f32 = 0.75;
    /// Shell lifetime before it self-detonates, in seconds
    pub const LIFETIME_SECS: f32 = 2.0;
    /// Distance from the tank center to the muzzle
    pub const MUZZLE_OFFSET: f32 = 1.0;
}

/// Health-pack pickup constants
pub mod pickup {
    /// Health restored on collection
    pub const HEAL_AMOUNT: f32 = 40.0;
    /// Contact detection radius around the pickup
    pub const CONTACT_RADIUS: f32 = 1.0;
    /// Delay before a collected pickup reappears, in seconds
    pub const RESPAWN_DELAY_SECS: f32 = 5.0;
    /// Interval between world pickup drops, in seconds
    pub const SPAWN_INTERVAL_SECS: f32 = 5.0;
    /// Spawn area bounds on the x axis
    pub const AREA_MIN_X: f32 = -50.0;
    pub const AREA_MAX_X: f32 = 50.0;
    /// Spawn area bounds on the z axis
    pub const AREA_MIN_Z: f32 = -50.0;
    pub const AREA_MAX_Z: f32 = 50.0;
}

/// Respawn constants
pub mod respawn {
    /// Delay between a tank's death and its respawn, in seconds
    pub const DELAY_SECS: f32 = 3.0;
}

/// Camera framing constants
pub mod camera {
    /// Damping time for position and zoom smoothing, in seconds
    pub const DAMP_TIME: f32 = 0.2;
    /// Extra space around the screen edges
    pub const EDGE_BUFFER: f32 = 4.0;
    /// Minimum orthographic half-height (zoom-in floor)
    pub const MIN_SIZE: f32 = 6.5;
    /// Viewport aspect ratio used for the half-width term
    pub const ASPECT: f32 = 16.0 / 9.0;
    /// Fixed camera rig height above the ground plane
    pub const HEIGHT: f32 = 20.0;
}

/// Launch speed for a charge fraction in `[0, 1]`
#[inline]
pub fn launch_speed(charge: f32) -> f32 {
    let charge = charge.clamp(0.0, 1.0);
    shell::MIN_LAUNCH_FORCE + charge * (shell::MAX_LAUNCH_FORCE - shell::MIN_LAUNCH_FORCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate() {
        assert_eq!(sim::TICK_RATE, 30);
        assert!((sim::DT - 1.0 / 30.0).abs() < 0.0001);
        assert_eq!(sim::TICK_DURATION_MS, 33);
    }

    #[test]
    fn test_launch_force_ordering() {
        assert!(shell::MIN_LAUNCH_FORCE < shell::MAX_LAUNCH_FORCE);
    }

    #[test]
    fn test_launch_speed_bounds() {
        assert_eq!(launch_speed(0.0), shell::MIN_LAUNCH_FORCE);
        assert_eq!(launch_speed(1.0), shell::MAX_LAUNCH_FORCE);
        // Out-of-range charge is clamped, not extrapolated
        assert_eq!(launch_speed(-1.0), shell::MIN_LAUNCH_FORCE);
        assert_eq!(launch_speed(2.0), shell::MAX_LAUNCH_FORCE);
    }

    #[test]
    fn test_launch_speed_midpoint() {
        let mid = launch_speed(0.5);
        assert!((mid - 22.5).abs() < 0.001);
    }

    #[test]
    fn test_pickup_area_ordering() {
        assert!(pickup::AREA_MIN_X < pickup::AREA_MAX_X);
        assert!(pickup::AREA_MIN_Z < pickup::AREA_MAX_Z);
    }

    #[test]
    fn test_explosion_radius_positive() {
        assert!(shell::EXPLOSION_RADIUS > 0.0);
    }

    #[test]
    fn test_camera_floor_positive() {
        assert!(camera::MIN_SIZE > 0.0);
        assert!(camera::ASPECT > 0.0);
        assert!(camera::DAMP_TIME > 0.0);
    }
}
