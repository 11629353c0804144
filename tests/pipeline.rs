//! End-to-end runs: JSON structure in, BILD scene out.

use glam::DVec3;
use serde_json::json;
use snfg3d::command::{CommandOutcome, SnfgCommand};
use snfg3d::error::SnfgError;
use snfg3d::host::memory::MemoryStructure;
use snfg3d::host::{MoleculeId, StructureHost};
use snfg3d::options::Options;
use snfg3d::output::bild::BildScene;
use snfg3d::scene::{ChangeEvent, SessionRegistry};

/// GlcNAc N-linked to an asparagine side chain.
fn glycosylated_asparagine(with_alpha_carbon: bool) -> String {
    let mut asn = vec![
        json!({"name": "ND2", "element": "N", "coord": [2.8, 0.0, 0.2]}),
        json!({"name": "CG", "element": "C", "coord": [3.8, 0.0, 0.5]}),
        json!({"name": "CB", "element": "C", "coord": [4.8, 0.0, 0.0]}),
    ];
    if with_alpha_carbon {
        asn.push(json!({"name": "CA", "element": "C", "coord": [5.8, 0.0, 0.4]}));
    }
    let mut bonds = vec![
        [0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 0],
        [0, 6], [6, 7], [7, 8],
    ];
    if with_alpha_carbon {
        bonds.push([8, 9]);
    }
    json!({
        "molecules": [{
            "name": "1abc",
            "residues": [
                {
                    "type": "NAG",
                    "ligand": true,
                    "atoms": [
                        {"name": "C1", "element": "C", "coord": [1.4, 0.0, 0.0]},
                        {"name": "C2", "element": "C", "coord": [0.7, 1.212, 0.0]},
                        {"name": "C3", "element": "C", "coord": [-0.7, 1.212, 0.0]},
                        {"name": "C4", "element": "C", "coord": [-1.4, 0.0, 0.0]},
                        {"name": "C5", "element": "C", "coord": [-0.7, -1.212, 0.0]},
                        {"name": "O5", "element": "O", "coord": [0.7, -1.212, 0.0]}
                    ]
                },
                {"type": "ASN", "atoms": asn}
            ],
            "bonds": bonds
        }]
    })
    .to_string()
}

fn run(
    command: &str,
    host: &MemoryStructure,
    registry: &mut SessionRegistry,
    scene: &mut BildScene,
) -> Result<CommandOutcome, SnfgError> {
    SnfgCommand::parse(command)?.execute(
        registry,
        &Options::default(),
        host,
        scene,
    )
}

#[test]
fn full_method_draws_glyph_and_n_linked_connector() {
    let host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();

    let outcome = run("snfg full", &host, &mut registry, &mut scene).unwrap();
    let CommandOutcome::Created(id) = outcome else {
        panic!("expected a session");
    };
    assert_eq!(registry.get(id).unwrap().glyph_count(), 1);
    assert!(registry.get(id).unwrap().problematic_residues().is_empty());

    let bild = scene.render();
    assert_eq!(bild.matches(".comment SNFG ").count(), 2);
    assert!(bild.contains(".comment SNFG connector n-linked"));
    // GlcNAc is a blue and white cube: 12 triangles.
    assert_eq!(bild.matches(".polygon").count(), 12);
    assert!(bild.contains(".sphere 5.800 0.000 0.400 0.500\n"));

    let nag = host.molecule_residues(MoleculeId(0))[0];
    assert_eq!(scene.recorded().residue_visible(nag), Some(false));
}

#[test]
fn icon_method_has_no_connectors_and_keeps_atoms_shown() {
    let host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();

    let _ = run("snfg icon", &host, &mut registry, &mut scene).unwrap();
    let bild = scene.render();
    assert!(!bild.contains("connector"));
    assert!(!bild.contains(".cylinder"));
    let nag = host.molecule_residues(MoleculeId(0))[0];
    assert_ne!(scene.recorded().residue_visible(nag), Some(false));
}

#[test]
fn coordinate_change_moves_the_scene() {
    let mut host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();
    let _ = run("snfg full", &host, &mut registry, &mut scene).unwrap();

    host.translate_molecule(MoleculeId(0), DVec3::new(10.0, 0.0, 0.0));
    let failures = registry.dispatch(
        &ChangeEvent::coordinates_changed(vec![MoleculeId(0)]),
        &host,
        &mut scene,
    );
    assert!(failures.is_empty());

    let bild = scene.render();
    assert!(bild.contains(".sphere 15.800 0.000 0.400 0.500\n"));
    assert!(!bild.contains(".sphere 5.800 0.000 0.400 0.500\n"));
    assert_eq!(bild.matches(".comment SNFG ").count(), 2);
}

#[test]
fn deleting_the_sugar_clears_its_batches() {
    let mut host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();
    let _ = run("snfg full", &host, &mut registry, &mut scene).unwrap();

    let nag = host.molecule_residues(MoleculeId(0))[0];
    assert!(host.delete_residue(nag));
    let failures = registry.dispatch(
        &ChangeEvent::residues_deleted(vec![nag]),
        &host,
        &mut scene,
    );
    assert!(failures.is_empty());
    assert!(scene.render().is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn missing_alpha_carbon_aborts_the_session() {
    let host = MemoryStructure::from_json(&glycosylated_asparagine(false))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();

    let err = run("snfg full", &host, &mut registry, &mut scene).unwrap_err();
    assert!(matches!(err, SnfgError::MissingAlphaCarbon { .. }));
    assert!(registry.is_empty());
    assert!(scene.render().is_empty());
}

#[test]
fn unsupported_method_creates_nothing() {
    let host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();

    let err = run("snfg method=ribbon", &host, &mut registry, &mut scene)
        .unwrap_err();
    assert!(matches!(err, SnfgError::UnsupportedMethod(_)));
    assert!(registry.is_empty());
    assert!(scene.render().is_empty());
}

#[test]
fn undo_removes_every_session() {
    let host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();

    let _ = run("snfg fullshown", &host, &mut registry, &mut scene).unwrap();
    assert!(!scene.render().is_empty());
    let outcome = run("snfg undo", &host, &mut registry, &mut scene).unwrap();
    assert_eq!(outcome, CommandOutcome::Undone(1));
    assert!(scene.render().is_empty());
    assert!(registry.is_empty());
}

#[test]
fn host_sees_the_loaded_ring() {
    let host = MemoryStructure::from_json(&glycosylated_asparagine(true))
        .unwrap();
    let rings = host.minimum_rings(MoleculeId(0));
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].len(), 6);
}
