//! Orbit camera: rotation accumulation, smoothing, and pose placement.
//!
//! [`OrbitRig`] ties the pieces together; the submodules are usable on
//! their own.

/// The per-frame orbit rig.
pub mod rig;
/// Clamped rotation accumulators.
pub mod rotation;
/// Critically damped smoothing.
pub mod smooth;
/// Euler transforms and camera poses.
pub mod transform;

pub use rig::OrbitRig;
pub use rotation::RotationState;
pub use smooth::{smooth_damp, smooth_damp_f32};
pub use transform::{euler_to_quat, CameraPose, Transform};
