use glam::{Vec2, Vec3};

use super::rotation::RotationState;
use super::smooth::smooth_damp;
use super::transform::{CameraPose, Transform};
use crate::input::{DirectionSampler, InputMode, InputSnapshot};
use crate::options::Options;

/// Orbit camera driven by pointer or touch movement.
///
/// Each [`update`](Self::update):
/// 1. samples a discrete direction from the configured input source,
/// 2. adds it to the rotation accumulators and applies the clamps,
/// 3. smooth-damps the displayed rotation toward the accumulators,
/// 4. places the camera `distance` units behind the target along its
///    newly rotated forward axis.
///
/// Everything is frame-synchronous; call `update` once per rendered
/// frame with that frame's delta time.
///
/// ```
/// use glam::Vec3;
/// use orbitcam::{input::FrameInput, options::Options, OrbitRig};
///
/// let mut rig = OrbitRig::new(Options::default());
/// let pose = rig.update(1.0 / 60.0, &FrameInput::new(), Vec3::ZERO);
/// assert_eq!(pose.position, Vec3::new(0.0, 0.0, -10.0));
/// ```
#[derive(Debug, Clone)]
pub struct OrbitRig {
    options: Options,
    enabled: bool,

    pointer: DirectionSampler,
    touch: DirectionSampler,
    rotation: RotationState,

    current_rotation: Vec3,
    velocity: Vec3,
    pose: CameraPose,
}

impl OrbitRig {
    /// Create a rig at rest. `options` are validated first.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options: options.validated(),
            enabled: true,
            pointer: DirectionSampler::new(),
            touch: DirectionSampler::new(),
            rotation: RotationState::default(),
            current_rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            pose: CameraPose::default(),
        }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Motion state is kept, so a new clamp takes
    /// effect on the next update.
    pub fn set_options(&mut self, options: Options) {
        self.options = options.validated();
    }

    /// Whether updates currently read input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the rig. A disabled rig ignores input and keeps
    /// returning its last pose.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            let state = if enabled { "enabled" } else { "disabled" };
            log::debug!("orbit rig {state}");
        }
        self.enabled = enabled;
    }

    /// Return to the initial motion state: zero rotation and velocity,
    /// samplers back at the origin.
    pub fn reset(&mut self) {
        self.pointer.reset();
        self.touch.reset();
        self.rotation = RotationState::default();
        self.current_rotation = Vec3::ZERO;
        self.velocity = Vec3::ZERO;
        self.pose = CameraPose::default();
    }

    /// Accumulated (unsmoothed) rotation.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Smoothed rotation as Euler angles in degrees.
    #[must_use]
    pub fn current_rotation(&self) -> Vec3 {
        self.current_rotation
    }

    /// Pose produced by the last update.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Advance one frame.
    ///
    /// `dt` is the frame time in seconds, `input` the current device
    /// state and `target` the world position being orbited.
    pub fn update(
        &mut self,
        dt: f32,
        input: &impl InputSnapshot,
        target: Vec3,
    ) -> CameraPose {
        if !self.enabled {
            return self.pose;
        }

        let direction = self.sample(input);
        if direction != Vec2::ZERO {
            log::trace!("orbit input direction {direction}");
        }

        let Options {
            input: input_opts,
            orbit,
            yaw,
            pitch,
        } = &self.options;
        self.rotation
            .integrate(direction, input_opts.sensitivity, yaw, pitch);

        let max_speed = orbit.max_speed.unwrap_or(f32::INFINITY);
        self.current_rotation = smooth_damp(
            self.current_rotation,
            self.rotation.target(),
            &mut self.velocity,
            orbit.smooth_time,
            max_speed,
            dt,
        );

        // Forward must come from the rotation just computed
        let mut pose = CameraPose {
            rotation_euler: self.current_rotation,
            position: Vec3::ZERO,
        };
        pose.position = target - pose.forward() * orbit.distance;

        self.pose = pose;
        pose
    }

    /// Advance one frame and write the result into a host camera
    /// transform, orbiting `target`'s position.
    pub fn update_transform(
        &mut self,
        dt: f32,
        input: &impl InputSnapshot,
        target: &Transform,
        camera: &mut Transform,
    ) {
        let pose = self.update(dt, input, target.position);
        pose.apply_to(camera);
    }

    fn sample(&mut self, input: &impl InputSnapshot) -> Vec2 {
        match self.options.input.mode {
            InputMode::Pointer => self.pointer.sample_pointer(input),
            InputMode::Touch => self.touch.sample_touch(input),
        }
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
