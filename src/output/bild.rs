//! BILD text rendering of scene batches.
//!
//! BILD is a line-oriented format: `.color r g b` switches the current
//! colour, `.polygon`, `.sphere` and `.cylinder` draw with it, and
//! `.comment` carries free text.

use std::fmt::{self, Write as _};
use std::io;

use glam::DVec3;

use super::RecordingSink;
use crate::geometry::Primitive;
use crate::host::ResidueId;
use crate::scene::{Batch, SceneKey, SceneSink};
use crate::symbol::Color;

/// [`SceneSink`] collecting batches for BILD output.
#[derive(Debug, Default, Clone)]
pub struct BildScene {
    scene: RecordingSink,
}

impl BildScene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded scene contents.
    #[must_use]
    pub fn recorded(&self) -> &RecordingSink {
        &self.scene
    }

    /// Render every batch, ordered by scene key.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the rendered scene to `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }
}

impl SceneSink for BildScene {
    fn insert(&mut self, key: SceneKey, batch: Batch) {
        self.scene.insert(key, batch);
    }

    fn remove(&mut self, key: SceneKey) {
        self.scene.remove(key);
    }

    fn set_residue_visible(&mut self, residue: ResidueId, visible: bool) {
        self.scene.set_residue_visible(residue, visible);
    }
}

impl fmt::Display for BildScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, batch) in self.scene.batches() {
            f.write_str(&render_batch(*key, batch))?;
        }
        Ok(())
    }
}

/// BILD lines for one batch.
#[must_use]
pub fn render_batch(key: SceneKey, batch: &Batch) -> String {
    let mut out = String::new();
    let _ = writeln!(out, ".comment {} {key}", batch.name);
    let mut current: Option<Color> = None;
    for primitive in &batch.primitives {
        let color = primitive.color();
        if current != Some(color) {
            let [r, g, b] = color.rgb();
            let _ = writeln!(out, ".color {r:.3} {g:.3} {b:.3}");
            current = Some(color);
        }
        let _ = match *primitive {
            Primitive::Triangle { vertices, .. } => writeln!(
                out,
                ".polygon {} {} {}",
                point(vertices[0]),
                point(vertices[1]),
                point(vertices[2])
            ),
            Primitive::Sphere { center, radius, .. } => {
                writeln!(out, ".sphere {} {radius:.3}", point(center))
            }
            Primitive::Cylinder {
                start, end, radius, ..
            } => writeln!(
                out,
                ".cylinder {} {} {radius:.3}",
                point(start),
                point(end)
            ),
        };
    }
    if let Some(label) = &batch.label {
        let _ = writeln!(
            out,
            ".comment label {} at {}",
            label.text,
            point(label.position)
        );
    }
    out
}

fn point(p: DVec3) -> String {
    format!("{:.3} {:.3} {:.3}", p.x, p.y, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SessionId;

    fn key(subid: u32) -> SceneKey {
        SceneKey {
            session: SessionId(0),
            id: 100,
            subid,
        }
    }

    #[test]
    fn colour_switches_once_per_run() {
        let tri = |color| Primitive::Triangle {
            vertices: [DVec3::ZERO, DVec3::X, DVec3::Y],
            color,
        };
        let batch = Batch {
            name: "SNFG Glucosamine".to_owned(),
            residue: ResidueId(1),
            primitives: vec![tri(Color::White), tri(Color::White), tri(Color::Blue)],
            label: None,
        };
        let text = render_batch(key(0), &batch);
        assert_eq!(text.matches(".color").count(), 2);
        assert_eq!(text.matches(".polygon").count(), 3);
        assert!(text.starts_with(".comment SNFG Glucosamine #0.100.0\n"));
        assert!(text.contains(".color 1.000 1.000 1.000\n"));
    }

    #[test]
    fn removed_batches_are_not_rendered() {
        let mut scene = BildScene::new();
        let batch = Batch {
            name: "SNFG connector terminal".to_owned(),
            residue: ResidueId(1),
            primitives: vec![
                Primitive::Sphere {
                    center: DVec3::new(1.0, 2.0, 3.0),
                    radius: 0.5,
                    color: Color::Gray,
                },
                Primitive::Cylinder {
                    start: DVec3::ZERO,
                    end: DVec3::new(1.0, 2.0, 3.0),
                    radius: 0.5,
                    color: Color::Gray,
                },
            ],
            label: None,
        };
        scene.insert(key(1), batch);
        let text = scene.render();
        assert!(text.contains(".sphere 1.000 2.000 3.000 0.500\n"));
        assert!(text.contains(
            ".cylinder 0.000 0.000 0.000 1.000 2.000 3.000 0.500\n"
        ));
        scene.remove(key(1));
        assert!(scene.render().is_empty());
    }
}
