//! Dynamic camera framing over the active roster.
//!
//! Every step the rig recomputes a desired position (the mean of the active
//! tanks on the ground plane) and a required zoom size (whatever half-height
//! keeps every active tank on screen), then eases both toward their targets
//! with critically damped smoothing. Zoom offsets are measured from the
//! just-computed desired position, not the lagging current one, so position
//! and zoom stay consistent within a single step.

use crate::config::SimConfig;
use crate::util::smoothing::{smooth_damp, smooth_damp_vec3};
use crate::util::vec3::Vec3;

#[derive(Debug, Clone)]
pub struct CameraRig {
    /// Current rig position; y stays at the configured height
    pub position: Vec3,
    /// Current orthographic half-height
    pub size: f32,
    desired_position: Vec3,
    move_velocity: Vec3,
    zoom_velocity: f32,
    damp_time: f32,
    edge_buffer: f32,
    min_size: f32,
    aspect: f32,
}

impl CameraRig {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.camera_height, 0.0),
            size: config.camera_min_size,
            desired_position: Vec3::new(0.0, config.camera_height, 0.0),
            move_velocity: Vec3::ZERO,
            zoom_velocity: 0.0,
            damp_time: config.camera_damp_time,
            edge_buffer: config.camera_edge_buffer,
            min_size: config.camera_min_size,
            aspect: config.camera_aspect,
        }
    }

    /// Snap straight to the computed framing, skipping the smoothing. Used
    /// at scene start so there is no visible pan/zoom animation.
    pub fn initialize(&mut self, targets: &[Vec3]) {
        self.find_average_position(targets);
        self.position = self.desired_position;
        self.size = self.required_size(targets);
        self.move_velocity = Vec3::ZERO;
        self.zoom_velocity = 0.0;
    }

    /// Advance the rig one step toward framing `targets` (active tanks only).
    pub fn update(&mut self, targets: &[Vec3], dt: f32) {
        self.find_average_position(targets);
        self.position = smooth_damp_vec3(
            self.position,
            self.desired_position,
            &mut self.move_velocity,
            self.damp_time,
            dt,
        );

        let required = self.required_size(targets);
        self.size = smooth_damp(self.size, required, &mut self.zoom_velocity, self.damp_time, dt);
    }

    /// Mean x/z of the targets, with y held at the rig's height. With no
    /// targets the previous desired position stands; the camera never
    /// collapses to the origin.
    fn find_average_position(&mut self, targets: &[Vec3]) {
        if targets.is_empty() {
            return;
        }

        let mut average = Vec3::ZERO;
        for target in targets {
            average += *target;
        }
        average *= 1.0 / targets.len() as f32;

        self.desired_position = average.with_y(self.position.y);
    }

    /// Half-height that keeps every target on screen around the desired
    /// position, with the edge buffer added and the zoom floor applied.
    fn required_size(&self, targets: &[Vec3]) -> f32 {
        let mut size: f32 = 0.0;

        for target in targets {
            let offset = *target - self.desired_position;
            size = size.max(offset.z.abs());
            size = size.max(offset.x.abs() / self.aspect);
        }

        size += self.edge_buffer;
        size.max(self.min_size)
    }

    /// Where the rig is headed this step. Exposed for tests and debugging.
    pub fn desired_position(&self) -> Vec3 {
        self.desired_position
    }
}
