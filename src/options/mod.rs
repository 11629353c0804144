//! Glyph rendering options with TOML preset support.
//!
//! Options hold the user-tunable defaults that the rendering methods
//! (`icon`, `full`, `fullred`, `fullshown`) turn into per-session
//! [`SessionSettings`](crate::scene::SessionSettings). They serialize to and
//! from TOML so presets can be kept on disk; loading and saving both reject
//! non-positive sizes and reduction factors outside `0..=1`.

mod glyph;
mod method;

use std::path::Path;

pub use glyph::{GlyphOptions, ReductionOptions};
pub use method::RenderMethod;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SnfgError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[reduction]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Method used when none is named.
    pub method: RenderMethod,
    /// Glyph sizes and connector preferences.
    pub glyph: GlyphOptions,
    /// Reduced connector factors.
    pub reduction: ReductionOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load a TOML preset. Missing fields use defaults; out-of-range glyph
    /// sizes or reduction factors are rejected.
    pub fn load(path: &Path) -> Result<Self, SnfgError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml(content: &str) -> Result<Self, SnfgError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SnfgError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Write a validated preset, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), SnfgError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| SnfgError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, content)?)
    }

    /// Check that sizes are positive and reduction factors lie in `0..=1`.
    pub fn validate(&self) -> Result<(), SnfgError> {
        let glyph = &self.glyph;
        for (name, size) in [
            ("glyph.icon_size", glyph.icon_size),
            ("glyph.full_size", glyph.full_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(SnfgError::OptionsParse(format!(
                    "{name} must be positive, got {size}"
                )));
            }
        }
        if !(glyph.cylinder_radius.is_finite() && glyph.cylinder_radius >= 0.0)
        {
            return Err(SnfgError::OptionsParse(format!(
                "glyph.cylinder_radius must not be negative, got {}",
                glyph.cylinder_radius
            )));
        }
        for (name, factor) in [
            ("reduction.cylinder_redfac", self.reduction.cylinder_redfac),
            ("reduction.sphere_redfac", self.reduction.sphere_redfac),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return Err(SnfgError::OptionsParse(format!(
                    "{name} must lie in 0..=1, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
method = "fullred"

[reduction]
sphere_redfac = 0.5
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.method, RenderMethod::Fullred);
        assert_eq!(opts.reduction.sphere_redfac, 0.5);
        // Everything else should be default
        assert_eq!(opts.reduction.cylinder_redfac, 0.4);
        assert_eq!(opts.glyph, GlyphOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("glyph = 3").unwrap_err();
        assert!(matches!(err, SnfgError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("snfg3d-options-{}", std::process::id()));
        let path = dir.join("big.toml");
        let mut opts = Options::default();
        opts.glyph.full_size = 6.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for toml_str in [
            "[glyph]\nicon_size = 0.0\n",
            "[glyph]\nfull_size = -2.0\n",
            "[glyph]\ncylinder_radius = -0.1\n",
            "[reduction]\nsphere_redfac = 1.5\n",
        ] {
            let err = Options::from_toml(toml_str).unwrap_err();
            assert!(matches!(err, SnfgError::OptionsParse(_)), "{toml_str}");
        }
    }

    #[test]
    fn invalid_options_are_not_saved() {
        let path = std::env::temp_dir().join(format!(
            "snfg3d-invalid-{}.toml",
            std::process::id()
        ));
        let mut opts = Options::default();
        opts.reduction.cylinder_redfac = 2.0;
        assert!(opts.save(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn missing_preset_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/snfg3d.toml"))
            .unwrap_err();
        assert!(matches!(err, SnfgError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("method"));
        assert!(props.contains_key("glyph"));
        assert!(props.contains_key("reduction"));
        let glyph = &props["glyph"]["properties"];
        assert!(glyph.get("icon_size").is_some());
        assert!(glyph.get("bondtypes").is_some());
    }

    #[test]
    fn method_names_parse() {
        for method in RenderMethod::ALL {
            assert_eq!(method.name().parse::<RenderMethod>().unwrap(), method);
        }
        let err = "wireframe".parse::<RenderMethod>().unwrap_err();
        assert!(matches!(err, SnfgError::UnsupportedMethod(m) if m == "wireframe"));
    }

    #[test]
    fn icon_settings_skip_connectors() {
        let opts = Options::default();
        let settings = RenderMethod::Icon.settings(&opts, None);
        assert_eq!(settings.base_size, 1.6);
        assert!(!settings.connect);
        assert!(!settings.hide_residue);
    }

    #[test]
    fn full_methods_differ_in_reduction_and_hiding() {
        let opts = Options::default();
        let full = RenderMethod::Full.settings(&opts, Some(3.0));
        assert_eq!(full.base_size, 3.0);
        assert!(full.connect);
        assert!(full.hide_residue);
        assert_eq!(full.cylinder_redfac, 0.0);
        assert_eq!(full.sphere_redfac, 0.0);

        let fullred = RenderMethod::Fullred.settings(&opts, None);
        assert_eq!(fullred.base_size, 4.0);
        assert!(fullred.hide_residue);
        assert_eq!(fullred.cylinder_redfac, 0.4);
        assert_eq!(fullred.sphere_redfac, 0.25);

        let shown = RenderMethod::Fullshown.settings(&opts, None);
        assert!(!shown.hide_residue);
        assert_eq!(shown.cylinder_redfac, 0.4);
    }
}
