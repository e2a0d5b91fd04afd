use crate::game::constants::{camera, pickup, respawn};
use crate::util::vec3::Vec3;

/// Simulation configuration
///
/// Components receive this at construction instead of reaching for global
/// settings; defaults mirror the gameplay constants.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Delay between a tank's death and its respawn (seconds)
    pub respawn_delay_secs: f32,
    /// Health restored when a pickup is collected
    pub pickup_heal: f32,
    /// Contact detection radius around a pickup
    pub pickup_contact_radius: f32,
    /// Delay before a collected pickup reappears (seconds)
    pub pickup_respawn_delay_secs: f32,
    /// Interval between world pickup drops (seconds)
    pub pickup_spawn_interval_secs: f32,
    /// Lower corner of the pickup spawn area
    pub pickup_area_min: Vec3,
    /// Upper corner of the pickup spawn area
    pub pickup_area_max: Vec3,
    /// Camera smoothing time for position and zoom (seconds)
    pub camera_damp_time: f32,
    /// Extra framing space around the screen edges
    pub camera_edge_buffer: f32,
    /// Zoom-in floor (minimum orthographic half-height)
    pub camera_min_size: f32,
    /// Viewport aspect ratio
    pub camera_aspect: f32,
    /// Fixed camera rig height above the ground plane
    pub camera_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            respawn_delay_secs: respawn::DELAY_SECS,
            pickup_heal: pickup::HEAL_AMOUNT,
            pickup_contact_radius: pickup::CONTACT_RADIUS,
            pickup_respawn_delay_secs: pickup::RESPAWN_DELAY_SECS,
            pickup_spawn_interval_secs: pickup::SPAWN_INTERVAL_SECS,
            pickup_area_min: Vec3::new(pickup::AREA_MIN_X, 0.0, pickup::AREA_MIN_Z),
            pickup_area_max: Vec3::new(pickup::AREA_MAX_X, 0.0, pickup::AREA_MAX_Z),
            camera_damp_time: camera::DAMP_TIME,
            camera_edge_buffer: camera::EDGE_BUFFER,
            camera_min_size: camera::MIN_SIZE,
            camera_aspect: camera::ASPECT,
            camera_height: camera::HEIGHT,
        }
    }
}

impl SimConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("RESPAWN_DELAY") {
            if let Ok(parsed) = raw.parse::<f32>() {
                if parsed >= 0.0 {
                    config.respawn_delay_secs = parsed;
                } else {
                    tracing::warn!("RESPAWN_DELAY must be >= 0, using default");
                }
            } else {
                tracing::warn!("Invalid RESPAWN_DELAY '{}', using default", raw);
            }
        }

        if let Ok(raw) = std::env::var("PICKUP_HEAL") {
            if let Ok(parsed) = raw.parse::<f32>() {
                if parsed >= 0.0 {
                    config.pickup_heal = parsed;
                } else {
                    tracing::warn!("PICKUP_HEAL must be >= 0, using default");
                }
            } else {
                tracing::warn!("Invalid PICKUP_HEAL '{}', using default", raw);
            }
        }

        if let Ok(raw) = std::env::var("PICKUP_RESPAWN_DELAY") {
            if let Ok(parsed) = raw.parse::<f32>() {
                if parsed >= 0.0 {
                    config.pickup_respawn_delay_secs = parsed;
                } else {
                    tracing::warn!("PICKUP_RESPAWN_DELAY must be >= 0, using default");
                }
            } else {
                tracing::warn!("Invalid PICKUP_RESPAWN_DELAY '{}', using default", raw);
            }
        }

        if let Ok(raw) = std::env::var("PICKUP_SPAWN_INTERVAL") {
            if let Ok(parsed) = raw.parse::<f32>() {
                if parsed > 0.0 {
                    config.pickup_spawn_interval_secs = parsed;
                } else {
                    tracing::warn!("PICKUP_SPAWN_INTERVAL must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid PICKUP_SPAWN_INTERVAL '{}', using default", raw);
            }
        }

        if let Ok(raw) = std::env::var("CAMERA_DAMP_TIME") {
            if let Ok(parsed) = raw.parse::<f32>() {
                if parsed > 0.0 {
                    config.camera_damp_time = parsed;
                } else {
                    tracing::warn!("CAMERA_DAMP_TIME must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid CAMERA_DAMP_TIME '{}', using default", raw);
            }
        }

        if let Ok(raw) = std::env::var("CAMERA_MIN_SIZE") {
            if let Ok(parsed) = raw.parse::<f32>() {
                if parsed > 0.0 {
                    config.camera_min_size = parsed;
                } else {
                    tracing::warn!("CAMERA_MIN_SIZE must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid CAMERA_MIN_SIZE '{}', using default", raw);
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), String> {
        if self.respawn_delay_secs < 0.0 {
            return Err("respawn_delay_secs cannot be negative".to_string());
        }
        if self.pickup_heal < 0.0 {
            return Err("pickup_heal cannot be negative".to_string());
        }
        if self.pickup_contact_radius <= 0.0 {
            return Err("pickup_contact_radius must be positive".to_string());
        }
        if self.pickup_respawn_delay_secs < 0.0 {
            return Err("pickup_respawn_delay_secs cannot be negative".to_string());
        }
        if self.pickup_spawn_interval_secs <= 0.0 {
            return Err("pickup_spawn_interval_secs must be positive".to_string());
        }
        if self.pickup_area_min.x >= self.pickup_area_max.x
            || self.pickup_area_min.z >= self.pickup_area_max.z
        {
            return Err("pickup spawn area min must be below max on x and z".to_string());
        }
        if self.camera_damp_time <= 0.0 {
            return Err("camera_damp_time must be positive".to_string());
        }
        if self.camera_min_size <= 0.0 {
            return Err("camera_min_size must be positive".to_string());
        }
        if self.camera_aspect <= 0.0 {
            return Err("camera_aspect must be positive".to_string());
        }
        Ok(())
    }
}
