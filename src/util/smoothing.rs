//! Critically damped smoothing toward a moving target.
//!
//! The camera uses this for both its position and its zoom size: each channel
//! keeps a velocity accumulator across steps, so consecutive updates produce
//! continuous motion that approaches the target without overshooting.

use crate::util::vec3::Vec3;

/// Smallest smooth time accepted; shorter values behave as a snap.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Advance `current` toward `target` over roughly `smooth_time` seconds.
///
/// `velocity` must persist between calls for the same channel. `dt` is the
/// fixed step duration and must be positive.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Padé approximation of e^-x, stable for the step sizes a tick produces
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Clamp at the target if the damped step carried past it
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// Component-wise [`smooth_damp`] over a vector channel.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    Vec3 {
        x: smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, dt),
        y: smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, dt),
        z: smooth_damp(current.z, target.z, &mut velocity.z, smooth_time, dt),
    }
}
