//! Centralized visualization options with TOML preset support.
//!
//! All tweakable settings (camera poses and limits, animation rates,
//! keybindings) are consolidated here. Options serialize to/from TOML for
//! presets, and the UI-exposed subset is described by a JSON Schema.

mod animation;
mod camera;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GlycovizError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Continuous motion rates.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; values
    /// that fail [`validate`](Self::validate) are rejected.
    ///
    /// # Errors
    ///
    /// [`GlycovizError::Io`] if the file cannot be read,
    /// [`GlycovizError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, GlycovizError> {
        let content = std::fs::read_to_string(path).map_err(GlycovizError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| GlycovizError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check the ranges TOML cannot express: positive, finite and ordered
    /// orbit limits, and a nonzero particle interval.
    ///
    /// # Errors
    ///
    /// [`GlycovizError::OptionsParse`] naming the offending field.
    pub fn validate(&self) -> Result<(), GlycovizError> {
        let cam = &self.camera;
        let limits = [cam.min_distance, cam.max_distance];
        if limits.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(GlycovizError::OptionsParse(format!(
                "camera distances must be positive and finite (min {}, max {})",
                cam.min_distance, cam.max_distance
            )));
        }
        if cam.min_distance > cam.max_distance {
            return Err(GlycovizError::OptionsParse(format!(
                "camera min_distance {} exceeds max_distance {}",
                cam.min_distance, cam.max_distance
            )));
        }
        if self.animation.particle_interval_ms == 0 {
            return Err(GlycovizError::OptionsParse(
                "animation particle_interval_ms must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`GlycovizError::OptionsParse`] on serialization failure,
    /// [`GlycovizError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GlycovizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlycovizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlycovizError::Io)?;
        }
        std::fs::write(path, content).map_err(GlycovizError::Io)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::VisualizationCommand;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
enzyme_spin_rate = 0.8
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.enzyme_spin_rate, 0.8);
        // Everything else should be default
        assert_eq!(opts.animation.particle_interval_ms, 50);
        assert_eq!(opts.camera.max_distance, 20.0);
        assert!(opts.animation.start_animating);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(VisualizationCommand::ToggleAnimation)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(VisualizationCommand::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("glycoviz-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.animation.float_amplitude = 0.25;
        opts.save(&dir.join("bouncy.toml")).unwrap();

        let loaded = Options::load(&dir.join("bouncy.toml")).unwrap();
        assert_eq!(loaded.animation.float_amplitude, 0.25);
        assert_eq!(Options::list_presets(&dir), vec!["bouncy".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("glycoviz-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[animation\nfloat_amplitude = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(GlycovizError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_inverted_camera_limits() {
        let dir = std::env::temp_dir()
            .join(format!("glycoviz-limits-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inverted.toml");
        std::fs::write(
            &path,
            "[camera]\nmin_distance = 30.0\nmax_distance = 20.0\n",
        )
        .unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(GlycovizError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn validate_checks_interval_and_finite_limits() {
        assert!(Options::default().validate().is_ok());

        let mut opts = Options::default();
        opts.animation.particle_interval_ms = 0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.max_distance = f32::INFINITY;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));
        assert!(!props.contains_key("keybindings"));

        let animation = &props["animation"]["properties"];
        assert!(animation.get("enzyme_spin_rate").is_some());
        assert!(animation.get("particle_step").is_none());
    }
}
