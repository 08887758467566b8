use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::InputMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Which device drives the rig and how strongly.
pub struct InputOptions {
    /// Input source sampled each frame.
    #[schemars(title = "Input Mode")]
    pub mode: InputMode,
    /// Degrees added to an accumulator per non-zero direction sample.
    #[schemars(title = "Sensitivity", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub sensitivity: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            mode: InputMode::Pointer,
            sensitivity: 3.0,
        }
    }
}
