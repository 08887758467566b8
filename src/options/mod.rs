//! Orbit rig configuration with TOML preset support.
//!
//! Every setting the rig reads (input mode, sensitivity, smoothing, orbit
//! distance and the two rotation clamps) lives here. Options serialize
//! to/from TOML so rigs can be tuned from preset files.

mod clamp;
mod input;
mod orbit;

use std::path::Path;

pub use clamp::AxisClamp;
pub use input::InputOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Input source and sensitivity.
    pub input: InputOptions,
    /// Orbit distance and smoothing.
    pub orbit: OrbitOptions,
    /// Clamp on the vertical rotation accumulator.
    #[serde(deserialize_with = "clamp::deserialize_yaw")]
    #[schemars(title = "Yaw", with = "AxisClamp")]
    pub yaw: AxisClamp,
    /// Clamp on the horizontal rotation accumulator.
    #[serde(deserialize_with = "clamp::deserialize_pitch")]
    #[schemars(title = "Pitch", with = "AxisClamp")]
    pub pitch: AxisClamp,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            orbit: OrbitOptions::default(),
            yaw: AxisClamp::YAW_DEFAULT,
            pitch: AxisClamp::PITCH_DEFAULT,
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Auto-correct values the rig cannot use.
    ///
    /// - an inverted clamp range gets `min` pulled down to `max`
    /// - a negative or non-finite distance becomes `0`
    /// - a negative or non-finite smooth time falls back to the default
    /// - a negative or NaN max speed is dropped
    ///
    /// Corrections are silent apart from a debug log line, and running
    /// this twice changes nothing the second time.
    pub fn validate(&mut self) {
        if self.yaw.correct() {
            log::debug!("yaw clamp min lowered to {}", self.yaw.max);
        }
        if self.pitch.correct() {
            log::debug!("pitch clamp min lowered to {}", self.pitch.max);
        }

        let orbit = &mut self.orbit;
        if !orbit.distance.is_finite() || orbit.distance < 0.0 {
            log::debug!("orbit distance {} reset to 0", orbit.distance);
            orbit.distance = 0.0;
        }
        if !orbit.smooth_time.is_finite() || orbit.smooth_time < 0.0 {
            log::debug!("smooth time {} reset to default", orbit.smooth_time);
            orbit.smooth_time = OrbitOptions::DEFAULT_SMOOTH_TIME;
        }
        if orbit.max_speed.is_some_and(|s| s.is_nan() || s < 0.0) {
            log::debug!("max speed {:?} dropped", orbit.max_speed);
            orbit.max_speed = None;
        }
    }

    /// Consume, validate and return.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Load options from a TOML file. Missing fields use defaults and the
    /// result is validated.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)?;
        log::info!("loaded orbit options from {}", path.display());
        Ok(options.validated())
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Load a preset by name from `dir`, or the first preset in name
    /// order when `name` is `None`. A directory without presets yields
    /// the defaults.
    pub fn load_preset(
        dir: &Path,
        name: Option<&str>,
    ) -> Result<Self, OrbitError> {
        let names = Self::list_presets(dir);
        log::info!("presets in {}: [{}]", dir.display(), names.join(", "));

        let chosen = match name {
            Some(name) if names.iter().any(|n| n == name) => name,
            Some(name) => {
                return Err(OrbitError::UnknownPreset(name.to_owned()));
            }
            None => match names.first() {
                Some(first) => first.as_str(),
                None => return Ok(Self::default()),
            },
        };
        Self::load(&dir.join(format!("{chosen}.toml")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputMode;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[input]
mode = "touch"

[orbit]
distance = 25.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.input.mode, InputMode::Touch);
        assert_eq!(opts.orbit.distance, 25.0);
        // Everything else should be default
        assert_eq!(opts.input.sensitivity, 3.0);
        assert_eq!(opts.orbit.smooth_time, 0.2);
        assert!(opts.yaw.enabled);
        assert!(!opts.pitch.enabled);
    }

    #[test]
    fn partial_clamp_tables_fill_from_axis_defaults() {
        let toml_str = r"
[yaw]
max = 30.0

[pitch]
min = -30.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(opts.yaw.enabled);
        assert_eq!(opts.yaw.min, 0.0);
        assert_eq!(opts.yaw.max, 30.0);

        assert!(!opts.pitch.enabled);
        assert_eq!(opts.pitch.min, -30.0);
        assert_eq!(opts.pitch.max, 40.0);
    }

    #[test]
    fn unknown_clamp_field_is_rejected() {
        let result = toml::from_str::<Options>("[pitch]\nlimit = 3.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_is_idempotent() {
        let mut opts = Options {
            yaw: AxisClamp::enabled(50.0, 40.0),
            pitch: AxisClamp::disabled(10.0, -10.0),
            ..Options::default()
        };
        opts.validate();
        assert_eq!(opts.yaw.min, 40.0);
        assert_eq!(opts.yaw.max, 40.0);
        assert_eq!(opts.pitch.min, -10.0);

        let once = opts.clone();
        opts.validate();
        opts.validate();
        assert_eq!(opts, once);
    }

    #[test]
    fn validate_fixes_orbit_values() {
        let opts = Options {
            orbit: OrbitOptions {
                smooth_time: f32::NAN,
                distance: -4.0,
                max_speed: Some(f32::NAN),
            },
            ..Options::default()
        }
        .validated();
        assert_eq!(opts.orbit.distance, 0.0);
        assert_eq!(opts.orbit.smooth_time, OrbitOptions::DEFAULT_SMOOTH_TIME);
        assert_eq!(opts.orbit.max_speed, None);
    }

    #[test]
    fn load_validates_and_save_round_trips() {
        let dir = std::env::temp_dir()
            .join(format!("orbitcam-options-{}", std::process::id()));
        let path = dir.join("inverted.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[yaw]\nmin = 90.0\nmax = 45.0\n").unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.yaw.min, 45.0);

        let saved = dir.join("nested/saved.toml");
        loaded.save(&saved).unwrap();
        assert_eq!(Options::load(&saved).unwrap(), loaded);
        assert_eq!(
            Options::list_presets(&dir),
            vec!["inverted".to_owned()]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_preset_picks_named_or_first() {
        let dir = std::env::temp_dir()
            .join(format!("orbitcam-presets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let empty = Options::load_preset(&dir, None).unwrap();
        assert_eq!(empty, Options::default());

        std::fs::write(dir.join("wide.toml"), "[orbit]\ndistance = 30.0\n")
            .unwrap();
        std::fs::write(dir.join("close.toml"), "[orbit]\ndistance = 4.0\n")
            .unwrap();

        let first = Options::load_preset(&dir, None).unwrap();
        assert_eq!(first.orbit.distance, 4.0);
        let wide = Options::load_preset(&dir, Some("wide")).unwrap();
        assert_eq!(wide.orbit.distance, 30.0);

        let err = Options::load_preset(&dir, Some("missing")).unwrap_err();
        assert!(
            matches!(err, OrbitError::UnknownPreset(ref n) if n == "missing")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("orbitcam-bad-{}", std::process::id()));
        let path = dir.join("bad.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[orbit]\ndistance = \"far\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrbitError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("input"));
        assert!(props.contains_key("orbit"));
        assert!(props.contains_key("yaw"));
        assert!(props.contains_key("pitch"));

        let orbit = &props["orbit"]["properties"];
        assert!(orbit.get("smooth_time").is_some());
        assert!(orbit.get("distance").is_some());
        assert!(orbit.get("max_speed").is_none());
    }
}
