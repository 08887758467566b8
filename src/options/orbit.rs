use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Distance and smoothing parameters for the orbit.
pub struct OrbitOptions {
    /// Smooth-damp time constant in seconds (roughly the time to reach
    /// the target rotation).
    #[schemars(title = "Smooth Time", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub smooth_time: f32,
    /// Distance kept between the camera and the target along the
    /// camera's forward axis.
    #[schemars(title = "Distance", range(min = 0.0, max = 500.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Optional cap on the smoothed angular speed, in degrees per second.
    #[schemars(skip)]
    pub max_speed: Option<f32>,
}

impl OrbitOptions {
    /// Default smoothing time constant in seconds.
    pub const DEFAULT_SMOOTH_TIME: f32 = 0.2;
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            smooth_time: Self::DEFAULT_SMOOTH_TIME,
            distance: 10.0,
            max_speed: None,
        }
    }
}
