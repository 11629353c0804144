// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! 3D Symbol Nomenclature for Glycans (SNFG) glyphs for carbohydrate
//! residues.
//!
//! snfg3d replaces each recognised monosaccharide ring in a molecular
//! structure with a solid SNFG symbol placed at the ring's center and
//! oriented by the ring's atoms, and connects the symbols with
//! cylinder-and-sphere links.
//!
//! # Key entry points
//!
//! - [`residue::ResidueTable`] - residue codes to SNFG shape and colours
//! - [`ring::detect`] - monosaccharide ring detection and classification
//! - [`geometry::build`] - triangle/sphere geometry for the eight shapes
//! - [`linkage::resolve`] - connector endpoint and linkage kind per ring
//! - [`scene::SessionRegistry`] - live sessions kept in sync with the host
//! - [`command::SnfgCommand`] - the `snfg` / `snfg undo` command surface
//! - [`options::Options`] - glyph sizes, connector factors, presets
//!
//! # Architecture
//!
//! The crate never owns a structure. It reads one through the
//! [`host::StructureHost`] trait and writes batches of primitives through
//! [`scene::SceneSink`]; [`host::memory::MemoryStructure`] and
//! [`output::bild::BildScene`] are the in-crate implementations used by the
//! `snfg3d` binary and the tests.

pub mod command;
pub mod error;
pub mod geometry;
pub mod host;
pub mod linkage;
pub mod options;
pub mod output;
pub mod residue;
pub mod ring;
pub mod scene;
pub mod symbol;
