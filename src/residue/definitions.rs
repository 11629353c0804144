//! Canonical SNFG residue types: shape, colours and display name.

use super::ResidueType;
use crate::symbol::{Color, Shape};

/// Every residue type a ring can classify to, in table order.
pub(super) const RESIDUE_TYPES: &[ResidueType] = &[
    ResidueType {
        id: "Glc",
        shape: Shape::Sphere,
        color1: Color::Blue,
        color2: None,
        name: "Glucose",
    },
    ResidueType {
        id: "Man",
        shape: Shape::Sphere,
        color1: Color::Green,
        color2: None,
        name: "Mannose",
    },
    ResidueType {
        id: "Gal",
        shape: Shape::Sphere,
        color1: Color::Yellow,
        color2: None,
        name: "Galactose",
    },
    ResidueType {
        id: "Gul",
        shape: Shape::Sphere,
        color1: Color::Orange,
        color2: None,
        name: "Gulose",
    },
    ResidueType {
        id: "Alt",
        shape: Shape::Sphere,
        color1: Color::Pink,
        color2: None,
        name: "Altrose",
    },
    ResidueType {
        id: "All",
        shape: Shape::Sphere,
        color1: Color::Purple,
        color2: None,
        name: "Allose",
    },
    ResidueType {
        id: "Tal",
        shape: Shape::Sphere,
        color1: Color::Cyan,
        color2: None,
        name: "Talose",
    },
    ResidueType {
        id: "Ido",
        shape: Shape::Sphere,
        color1: Color::Brown,
        color2: None,
        name: "Idose",
    },
    ResidueType {
        id: "GlcNAc",
        shape: Shape::Cube,
        color1: Color::Blue,
        color2: None,
        name: "N acetyl glucosamine",
    },
    ResidueType {
        id: "ManNAc",
        shape: Shape::Cube,
        color1: Color::Green,
        color2: None,
        name: "N acetyl mannosamine",
    },
    ResidueType {
        id: "GalNAc",
        shape: Shape::Cube,
        color1: Color::Yellow,
        color2: None,
        name: "N acetyl galactosamine",
    },
    ResidueType {
        id: "GulNAc",
        shape: Shape::Cube,
        color1: Color::Orange,
        color2: None,
        name: "N acetyl gulosamine",
    },
    ResidueType {
        id: "AltNAc",
        shape: Shape::Cube,
        color1: Color::Pink,
        color2: None,
        name: "N acetyl altrosamine",
    },
    ResidueType {
        id: "AllNAc",
        shape: Shape::Cube,
        color1: Color::Purple,
        color2: None,
        name: "N acetyl allosamine",
    },
    ResidueType {
        id: "TalNAc",
        shape: Shape::Cube,
        color1: Color::Cyan,
        color2: None,
        name: "N acetyl talosamine",
    },
    ResidueType {
        id: "IdoNAc",
        shape: Shape::Cube,
        color1: Color::Brown,
        color2: None,
        name: "N acetyl idosamine",
    },
    ResidueType {
        id: "GlcN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Blue),
        name: "Glucosamine",
    },
    ResidueType {
        id: "ManN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Green),
        name: "Mannosamine",
    },
    ResidueType {
        id: "GalN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Yellow),
        name: "Galactosamine",
    },
    ResidueType {
        id: "GulN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Orange),
        name: "Gulosamine",
    },
    ResidueType {
        id: "AltN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Pink),
        name: "Altrosamine",
    },
    ResidueType {
        id: "AllN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Purple),
        name: "Allosamine",
    },
    ResidueType {
        id: "TalN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Cyan),
        name: "Talosamine",
    },
    ResidueType {
        id: "IdoN",
        shape: Shape::Cube,
        color1: Color::White,
        color2: Some(Color::Brown),
        name: "Idosamine",
    },
    ResidueType {
        id: "GlcA",
        shape: Shape::Diamond,
        color1: Color::Blue,
        color2: Some(Color::White),
        name: "Glucuronic acid",
    },
    ResidueType {
        id: "ManA",
        shape: Shape::Diamond,
        color1: Color::Green,
        color2: Some(Color::White),
        name: "Mannuronic acid",
    },
    ResidueType {
        id: "GalA",
        shape: Shape::Diamond,
        color1: Color::Yellow,
        color2: Some(Color::White),
        name: "Galacturonic acid",
    },
    ResidueType {
        id: "GulA",
        shape: Shape::Diamond,
        color1: Color::Orange,
        color2: Some(Color::White),
        name: "Guluronic acid",
    },
    ResidueType {
        id: "AltA",
        shape: Shape::Diamond,
        color1: Color::White,
        color2: Some(Color::Pink),
        name: "Altruronic acid",
    },
    ResidueType {
        id: "AllA",
        shape: Shape::Diamond,
        color1: Color::Purple,
        color2: Some(Color::White),
        name: "Alluronic acid",
    },
    ResidueType {
        id: "TalA",
        shape: Shape::Diamond,
        color1: Color::Cyan,
        color2: Some(Color::White),
        name: "Taluronic acid",
    },
    ResidueType {
        id: "IdoA",
        shape: Shape::Diamond,
        color1: Color::White,
        color2: Some(Color::Brown),
        name: "Iduronic acid",
    },
    ResidueType {
        id: "Qui",
        shape: Shape::Cone,
        color1: Color::Blue,
        color2: None,
        name: "Quinovose",
    },
    ResidueType {
        id: "Rha",
        shape: Shape::Cone,
        color1: Color::Green,
        color2: None,
        name: "Rhamnose",
    },
    ResidueType {
        id: "x6dAlt",
        shape: Shape::Cone,
        color1: Color::Pink,
        color2: None,
        name: "6 Deoxy altrose",
    },
    ResidueType {
        id: "x6dTal",
        shape: Shape::Cone,
        color1: Color::Cyan,
        color2: None,
        name: "6 Deoxy talose",
    },
    ResidueType {
        id: "Fuc",
        shape: Shape::Cone,
        color1: Color::Red,
        color2: None,
        name: "Fucose",
    },
    ResidueType {
        id: "QuiNAc",
        shape: Shape::Cone,
        color1: Color::White,
        color2: Some(Color::Blue),
        name: "N Acetyl quinovosamine",
    },
    ResidueType {
        id: "RhaNAc",
        shape: Shape::Cone,
        color1: Color::White,
        color2: Some(Color::Green),
        name: "N Acetyl rhamnosamine",
    },
    ResidueType {
        id: "FucNAc",
        shape: Shape::Cone,
        color1: Color::White,
        color2: Some(Color::Red),
        name: "N Acetyl fucosamine",
    },
    ResidueType {
        id: "Oli",
        shape: Shape::Rectangle,
        color1: Color::Blue,
        color2: None,
        name: "Olivose",
    },
    ResidueType {
        id: "Tyv",
        shape: Shape::Rectangle,
        color1: Color::Green,
        color2: None,
        name: "Tyvelose",
    },
    ResidueType {
        id: "Abe",
        shape: Shape::Rectangle,
        color1: Color::Orange,
        color2: None,
        name: "Abequose",
    },
    ResidueType {
        id: "Par",
        shape: Shape::Rectangle,
        color1: Color::Pink,
        color2: None,
        name: "Paratose",
    },
    ResidueType {
        id: "Dig",
        shape: Shape::Rectangle,
        color1: Color::Purple,
        color2: None,
        name: "Digitoxose",
    },
    ResidueType {
        id: "Col",
        shape: Shape::Rectangle,
        color1: Color::Cyan,
        color2: None,
        name: "Colitose",
    },
    ResidueType {
        id: "Ara",
        shape: Shape::Star,
        color1: Color::Green,
        color2: None,
        name: "Arabinose",
    },
    ResidueType {
        id: "Lyx",
        shape: Shape::Star,
        color1: Color::Yellow,
        color2: None,
        name: "Lyxose",
    },
    ResidueType {
        id: "Xyl",
        shape: Shape::Star,
        color1: Color::Orange,
        color2: None,
        name: "Xylose",
    },
    ResidueType {
        id: "Rib",
        shape: Shape::Star,
        color1: Color::Pink,
        color2: None,
        name: "Ribose",
    },
    ResidueType {
        id: "Kdn",
        shape: Shape::Diamond,
        color1: Color::Green,
        color2: None,
        name: "Ketodeoxynononic acid",
    },
    ResidueType {
        id: "Neu5Ac",
        shape: Shape::Diamond,
        color1: Color::Purple,
        color2: None,
        name: "N Acetylneuraminic acid",
    },
    ResidueType {
        id: "Neu5Gc",
        shape: Shape::Diamond,
        color1: Color::Cyan,
        color2: None,
        name: "N Glycolylneuraminic acid",
    },
    ResidueType {
        id: "Neu",
        shape: Shape::Diamond,
        color1: Color::Brown,
        color2: None,
        name: "Neuraminic acid",
    },
    ResidueType {
        id: "Bac",
        shape: Shape::Hexagon,
        color1: Color::Blue,
        color2: None,
        name: "Bacillosamine",
    },
    ResidueType {
        id: "LDManHep",
        shape: Shape::Hexagon,
        color1: Color::Green,
        color2: None,
        name: "L glycero D manno Heptose",
    },
    ResidueType {
        id: "Kdo",
        shape: Shape::Hexagon,
        color1: Color::Yellow,
        color2: None,
        name: "Ketodeoxyoctonic acid",
    },
    ResidueType {
        id: "Dha",
        shape: Shape::Hexagon,
        color1: Color::Orange,
        color2: None,
        name: "3 Deoxy lyxo heptulosaric acid",
    },
    ResidueType {
        id: "DDManHep",
        shape: Shape::Hexagon,
        color1: Color::Pink,
        color2: None,
        name: "D glycero D manno Heptose",
    },
    ResidueType {
        id: "MurNAc",
        shape: Shape::Hexagon,
        color1: Color::Purple,
        color2: None,
        name: "N Acetylmuramic acid",
    },
    ResidueType {
        id: "MurNGc",
        shape: Shape::Hexagon,
        color1: Color::Cyan,
        color2: None,
        name: "N Glycolylmuramic acid",
    },
    ResidueType {
        id: "Mur",
        shape: Shape::Hexagon,
        color1: Color::Brown,
        color2: None,
        name: "Muramic acid",
    },
    ResidueType {
        id: "Api",
        shape: Shape::Pentagon,
        color1: Color::Blue,
        color2: None,
        name: "Apiose",
    },
    ResidueType {
        id: "Fruc",
        shape: Shape::Pentagon,
        color1: Color::Green,
        color2: None,
        name: "Fructose",
    },
    ResidueType {
        id: "Tag",
        shape: Shape::Pentagon,
        color1: Color::Yellow,
        color2: None,
        name: "Tagatose",
    },
    ResidueType {
        id: "Sor",
        shape: Shape::Pentagon,
        color1: Color::Orange,
        color2: None,
        name: "Sorbose",
    },
    ResidueType {
        id: "Psi",
        shape: Shape::Pentagon,
        color1: Color::Pink,
        color2: None,
        name: "Psicose",
    },
];
