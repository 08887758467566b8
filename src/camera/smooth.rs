//! Critically damped smoothing toward a moving target.
//!
//! Both functions model a spring with damping ratio 1, integrated in closed
//! form, so the result does not depend on frame rate and never oscillates.
//! `exp(-x)` is evaluated with the rational approximation
//! `1 / (1 + x + 0.48x² + 0.235x³)`, accurate to well under a percent for
//! the step sizes a frame produces.

use glam::Vec3;

/// Smallest smooth time accepted; shorter values are raised to this.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

#[inline]
fn decay(omega: f32, dt: f32) -> f32 {
    let x = omega * dt;
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Longest stretch the spring may take. A negative or NaN `max_speed`
/// means no cap, matching how [`Options`](crate::Options) drops them.
#[inline]
fn max_change(max_speed: f32, smooth_time: f32) -> f32 {
    if max_speed.is_nan() || max_speed < 0.0 {
        return f32::INFINITY;
    }
    max_speed * smooth_time
}

/// Move `current` toward `target`, updating `velocity` in place.
///
/// `smooth_time` is roughly the time it takes to reach the target.
/// `max_speed` caps how far the spring may be stretched (the distance
/// considered is at most `max_speed * smooth_time`); pass `f32::INFINITY`
/// for no cap. Negative or NaN values also mean no cap. A non-positive
/// `dt` returns `current` untouched.
///
/// If a step would carry the value past the target, it lands exactly on
/// the target instead and `velocity` is recomputed to match.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let exp = decay(omega, dt);

    let original_target = target;
    let change =
        (current - target).clamp_length_max(max_change(max_speed, smooth_time));
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    let to_target = original_target - current;
    let past_target = output - original_target;
    if to_target.dot(past_target) > 0.0 {
        output = original_target;
        *velocity = (output - original_target) / dt;
    }

    output
}

/// Scalar form of [`smooth_damp`].
pub fn smooth_damp_f32(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let exp = decay(omega, dt);

    let original_target = target;
    let max_change = max_change(max_speed, smooth_time);
    // Not f32::clamp: it panics on a NaN bound.
    let change = (current - target).max(-max_change).min(max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    if (original_target - current > 0.0) == (output > original_target) {
        output = original_target;
        *velocity = (output - original_target) / dt;
    }

    output
}
