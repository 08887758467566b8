use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Optional clamp applied to one rotation accumulator, in degrees.
///
/// The `yaw` clamp limits the vertical accumulator and the `pitch` clamp
/// limits the horizontal one (see [`crate::camera::RotationState`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct AxisClamp {
    /// Whether the clamp is applied.
    pub enabled: bool,
    /// Lower bound in degrees.
    #[schemars(range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub min: f32,
    /// Upper bound in degrees.
    #[schemars(range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub max: f32,
}

impl AxisClamp {
    /// Default vertical clamp: on, `[0, 40]`.
    pub const YAW_DEFAULT: Self = Self::enabled(0.0, 40.0);
    /// Default horizontal clamp: off, `[0, 40]`.
    pub const PITCH_DEFAULT: Self = Self::disabled(0.0, 40.0);

    /// A clamp over `[min, max]` that is switched on.
    #[must_use]
    pub const fn enabled(min: f32, max: f32) -> Self {
        Self {
            enabled: true,
            min,
            max,
        }
    }

    /// A clamp that is switched off but keeps the given range around.
    #[must_use]
    pub const fn disabled(min: f32, max: f32) -> Self {
        Self {
            enabled: false,
            min,
            max,
        }
    }

    /// Pull `min` down to `max` when the range is inverted.
    ///
    /// Returns `true` if anything changed.
    pub fn correct(&mut self) -> bool {
        if self.min > self.max {
            self.min = self.max;
            return true;
        }
        false
    }

    /// Apply the clamp to `value` if enabled.
    #[must_use]
    pub fn apply(&self, value: f32) -> f32 {
        if self.enabled {
            // Not f32::clamp: it panics when min > max.
            value.max(self.min).min(self.max)
        } else {
            value
        }
    }
}

impl Default for AxisClamp {
    fn default() -> Self {
        Self::PITCH_DEFAULT
    }
}

/// Fields present in a preset's clamp table; missing ones come from the
/// axis default rather than [`AxisClamp::default`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ClampTable {
    enabled: Option<bool>,
    min: Option<f32>,
    max: Option<f32>,
}

impl ClampTable {
    fn over(self, base: AxisClamp) -> AxisClamp {
        AxisClamp {
            enabled: self.enabled.unwrap_or(base.enabled),
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
        }
    }
}

/// Deserialize a `[yaw]` table on top of [`AxisClamp::YAW_DEFAULT`].
pub(super) fn deserialize_yaw<'de, D>(d: D) -> Result<AxisClamp, D::Error>
where
    D: Deserializer<'de>,
{
    ClampTable::deserialize(d).map(|t| t.over(AxisClamp::YAW_DEFAULT))
}

/// Deserialize a `[pitch]` table on top of [`AxisClamp::PITCH_DEFAULT`].
pub(super) fn deserialize_pitch<'de, D>(d: D) -> Result<AxisClamp, D::Error>
where
    D: Deserializer<'de>,
{
    ClampTable::deserialize(d).map(|t| t.over(AxisClamp::PITCH_DEFAULT))
}
