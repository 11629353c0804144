use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Options;
use crate::error::SnfgError;
use crate::scene::SessionSettings;

/// Rendering preset a session is created with.
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
pub enum RenderMethod {
    /// Small glyphs on top of the atoms, no connectors.
    #[default]
    Icon,
    /// Full-size glyphs with connectors; residue atoms hidden.
    Full,
    /// As [`RenderMethod::Full`] with reduced reducing-end and cap
    /// connectors.
    Fullred,
    /// As [`RenderMethod::Fullred`] with residue atoms left visible.
    Fullshown,
}

impl RenderMethod {
    /// Every method.
    pub const ALL: [Self; 4] =
        [Self::Icon, Self::Full, Self::Fullred, Self::Fullshown];

    /// Lower-case method name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Full => "full",
            Self::Fullred => "fullred",
            Self::Fullshown => "fullshown",
        }
    }

    /// Session settings for this method. `size` overrides the preset's base
    /// size.
    #[must_use]
    pub fn settings(
        self,
        options: &Options,
        size: Option<f64>,
    ) -> SessionSettings {
        let glyph = &options.glyph;
        if self == Self::Icon {
            return SessionSettings {
                base_size: size.unwrap_or(glyph.icon_size),
                connect: false,
                hide_residue: false,
                ..SessionSettings::default()
            };
        }
        let (cylinder_redfac, sphere_redfac) = match self {
            Self::Fullred | Self::Fullshown => (
                options.reduction.cylinder_redfac,
                options.reduction.sphere_redfac,
            ),
            Self::Icon | Self::Full => (0.0, 0.0),
        };
        SessionSettings {
            base_size: size.unwrap_or(glyph.full_size),
            connect: glyph.connect,
            cylinder_radius: glyph.cylinder_radius,
            cylinder_redfac,
            sphere_redfac,
            hide_residue: self != Self::Fullshown,
            bondtypes: glyph.bondtypes,
        }
    }
}

impl FromStr for RenderMethod {
    type Err = SnfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| SnfgError::UnsupportedMethod(s.to_owned()))
    }
}

impl fmt::Display for RenderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
