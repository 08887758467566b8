use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::snapshot::InputSnapshot;

/// Minimum travel, in device units, before a movement counts as input.
pub const DEBOUNCE_THRESHOLD: f32 = 9.0;

/// Dot product an axis must reach before it registers.
const AXIS_THRESHOLD: f32 = 0.5;

/// Map a unit movement vector to `{-1, 0, 1}` per axis. Both thresholds
/// are inclusive.
fn discretize(movement: Vec2) -> Vec2 {
    let mut dir = Vec2::ZERO;

    let vertical = movement.dot(Vec2::Y);
    if vertical >= AXIS_THRESHOLD {
        dir.y = -1.0;
    } else if vertical <= -AXIS_THRESHOLD {
        dir.y = 1.0;
    }

    let horizontal = movement.dot(Vec2::X);
    dir.x = if horizontal >= AXIS_THRESHOLD { 1.0 } else { -1.0 };
    dir
}

/// Which device drives the rig.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Mouse / pen pointer position.
    #[default]
    Pointer,
    /// First active touch point; any further touches are ignored.
    Touch,
}

/// Turns successive raw positions from one source into discrete look
/// directions in `{-1, 0, 1}` per axis.
///
/// Movements shorter than [`DEBOUNCE_THRESHOLD`] return zero and do not
/// advance the recorded position, so slow drags accumulate until they
/// cross the threshold.
///
/// The axes are not symmetric:
/// - vertical: moving up yields `y = -1`, moving down yields `y = 1`,
///   mostly-horizontal motion yields `0`.
/// - horizontal: moving right yields `x = 1`; everything else, including
///   purely vertical motion, yields `x = -1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionSampler {
    last_position: Vec2,
}

impl DirectionSampler {
    /// Sampler with the last position at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Position recorded by the last accepted sample.
    #[must_use]
    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    /// Forget the recorded position.
    pub fn reset(&mut self) {
        self.last_position = Vec2::ZERO;
    }

    /// Sample a raw position.
    pub fn sample(&mut self, current: Vec2) -> Vec2 {
        if self.last_position.distance(current) < DEBOUNCE_THRESHOLD {
            return Vec2::ZERO;
        }

        let movement = (current - self.last_position).normalize_or_zero();
        let dir = discretize(movement);

        self.last_position = current;
        dir
    }

    /// Sample the pointer position of `input`.
    pub fn sample_pointer(&mut self, input: &impl InputSnapshot) -> Vec2 {
        self.sample(input.pointer_position())
    }

    /// Sample the first touch of `input`, or return zero when no finger
    /// is down.
    pub fn sample_touch(&mut self, input: &impl InputSnapshot) -> Vec2 {
        input
            .first_touch()
            .map_or(Vec2::ZERO, |touch| self.sample(touch.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FrameInput, InputEvent, TouchPhase};

    fn sampler_at(x: f32, y: f32) -> DirectionSampler {
        let mut sampler = DirectionSampler::new();
        let _ = sampler.sample(Vec2::new(x, y));
        assert_eq!(sampler.last_position(), Vec2::new(x, y));
        sampler
    }

    #[test]
    fn small_movements_are_debounced() {
        let mut sampler = sampler_at(100.0, 100.0);
        for delta in [
            Vec2::new(8.9, 0.0),
            Vec2::new(0.0, -8.0),
            Vec2::new(6.0, 6.0),
            Vec2::ZERO,
        ] {
            let dir = sampler.sample(Vec2::new(100.0, 100.0) + delta);
            assert_eq!(dir, Vec2::ZERO);
            assert_eq!(sampler.last_position(), Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn threshold_distance_is_accepted() {
        let mut sampler = sampler_at(0.0, 50.0);
        let dir = sampler.sample(Vec2::new(9.0, 50.0));
        assert_eq!(dir, Vec2::new(1.0, 0.0));
        assert_eq!(sampler.last_position(), Vec2::new(9.0, 50.0));
    }

    #[test]
    fn upward_motion_looks_down() {
        let mut sampler = sampler_at(0.0, 0.0);
        // dot with up is ~0.6 with a strong rightward part
        let dir = sampler.sample(Vec2::new(40.0, 30.0));
        assert_eq!(dir.y, -1.0);
        assert_eq!(dir.x, 1.0);

        let dir = sampler.sample(Vec2::new(40.0, 80.0));
        assert_eq!(dir.y, -1.0);
    }

    #[test]
    fn axis_thresholds_are_inclusive() {
        // cos 30° with the other component exactly 0.5
        let c = 3.0_f32.sqrt() / 2.0;
        assert_eq!(discretize(Vec2::new(c, 0.5)), Vec2::new(1.0, -1.0));
        assert_eq!(discretize(Vec2::new(-c, -0.5)), Vec2::new(-1.0, 1.0));
        assert_eq!(discretize(Vec2::new(0.5, c)), Vec2::new(1.0, -1.0));
        assert_eq!(discretize(Vec2::new(0.5, -c)), Vec2::new(1.0, 1.0));
        // Just inside the thresholds
        assert_eq!(discretize(Vec2::new(c, 0.499)), Vec2::new(1.0, 0.0));
        assert_eq!(discretize(Vec2::new(0.499, c)), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn sixty_degree_drag_registers_vertically() {
        let rise = 10.0 * 3.0_f32.sqrt();
        let mut sampler = sampler_at(0.0, 0.0);
        let dir = sampler.sample(Vec2::new(10.0, rise));
        assert_eq!(dir.y, -1.0);
        // Then 45° down and to the right
        let dir = sampler.sample(Vec2::new(10.0 + rise, 0.0));
        assert_eq!(dir, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn downward_motion_looks_up() {
        let mut sampler = sampler_at(0.0, 100.0);
        let dir = sampler.sample(Vec2::new(0.0, 50.0));
        assert_eq!(dir.y, 1.0);
    }

    #[test]
    fn horizontal_axis_has_no_dead_zone() {
        let mut sampler = sampler_at(0.0, 0.0);
        // Straight left
        assert_eq!(sampler.sample(Vec2::new(-20.0, 0.0)), Vec2::new(-1.0, 0.0));
        // Straight down: horizontal dot is 0, still -1
        assert_eq!(sampler.sample(Vec2::new(-20.0, -20.0)).x, -1.0);
        // Mostly up with a small rightward part: dot < 0.5
        assert_eq!(sampler.sample(Vec2::new(-15.0, 0.0)).x, -1.0);
        // Straight right
        assert_eq!(sampler.sample(Vec2::new(5.0, 0.0)), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn first_sample_is_measured_from_origin() {
        let mut sampler = DirectionSampler::new();
        let dir = sampler.sample(Vec2::new(500.0, 300.0));
        assert_eq!(dir, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn touch_without_fingers_is_zero() {
        let mut sampler = sampler_at(10.0, 10.0);
        let mut input = FrameInput::new();
        input.handle_event(InputEvent::CursorMoved { x: 900.0, y: 900.0 });
        assert_eq!(sampler.sample_touch(&input), Vec2::ZERO);
        assert_eq!(sampler.last_position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn touch_uses_first_finger_only() {
        let mut sampler = DirectionSampler::new();
        let mut input = FrameInput::new();
        input.handle_event(InputEvent::Touch {
            id: 1,
            x: 50.0,
            y: 0.0,
            phase: TouchPhase::Started,
        });
        input.handle_event(InputEvent::Touch {
            id: 2,
            x: -400.0,
            y: 0.0,
            phase: TouchPhase::Started,
        });

        assert_eq!(sampler.sample_touch(&input), Vec2::new(1.0, 0.0));
        assert_eq!(sampler.last_position(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn pointer_samples_pointer_position() {
        let mut sampler = DirectionSampler::new();
        let mut input = FrameInput::new();
        input.handle_event(InputEvent::CursorMoved { x: -30.0, y: 0.0 });
        assert_eq!(sampler.sample_pointer(&input), Vec2::new(-1.0, 0.0));
    }
}
