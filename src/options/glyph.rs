use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Glyphs", inline)]
#[serde(default)]
/// Glyph size and connector preferences.
pub struct GlyphOptions {
    /// Base glyph size of the `icon` method.
    #[schemars(title = "Icon Size", range(min = 0.1, max = 20.0))]
    pub icon_size: f64,
    /// Base glyph size of the `full` methods.
    #[schemars(title = "Full Size", range(min = 0.1, max = 20.0))]
    pub full_size: f64,
    /// Connector cylinder radius.
    #[schemars(title = "Cylinder Radius", range(min = 0.0, max = 5.0))]
    pub cylinder_radius: f64,
    /// Whether the `full` methods draw connectors.
    #[schemars(title = "Connect Glyphs")]
    pub connect: bool,
    /// Whether inter-glyph connectors show the linked carbon.
    #[schemars(title = "Show Bond Types")]
    pub bondtypes: bool,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            icon_size: 1.6,
            full_size: 4.0,
            cylinder_radius: 0.5,
            connect: true,
            bondtypes: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reduction", inline)]
#[serde(default)]
/// Radius reduction of reducing-end and cap connectors, used by the
/// `fullred` and `fullshown` methods.
pub struct ReductionOptions {
    /// Cylinder radius factor.
    #[schemars(title = "Cylinder Factor", range(min = 0.0, max = 1.0))]
    pub cylinder_redfac: f64,
    /// End-sphere radius factor.
    #[schemars(title = "Sphere Factor", range(min = 0.0, max = 1.0))]
    pub sphere_redfac: f64,
}

impl Default for ReductionOptions {
    fn default() -> Self {
        Self {
            cylinder_redfac: 0.4,
            sphere_redfac: 0.25,
        }
    }
}
