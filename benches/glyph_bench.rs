//! Glyph construction and session enable throughput.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec3;
use snfg3d::geometry::{self, GlyphSpec};
use snfg3d::host::memory::MemoryStructure;
use snfg3d::output::RecordingSink;
use snfg3d::scene::{SessionRegistry, SessionSettings};
use snfg3d::symbol::{Color, Shape};

const HEXOSE: [&str; 6] = ["C1", "C2", "C3", "C4", "C5", "O5"];

fn glyph_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph_build");
    for shape in Shape::ALL {
        let spec = GlyphSpec {
            shape,
            size: 4.0,
            center: DVec3::ZERO,
            facing: DVec3::new(1.4, 0.0, 0.0),
            reference: DVec3::new(0.7, 1.2, 0.3),
            color1: Color::Blue,
            color2: Color::White,
        };
        let _ = group.bench_function(shape.name(), |b| {
            b.iter(|| black_box(geometry::build(black_box(&spec))))
        });
    }
    group.finish();
}

fn session_enable_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_enable");

    for count in [10, 100, 500] {
        let mut host = MemoryStructure::new();
        let mol = host.add_molecule("glycans");
        for i in 0..count {
            let origin = DVec3::new(f64::from(i) * 6.0, 0.0, 0.0);
            let _ = host.add_ring_residue(mol, "GLC", &HEXOSE, origin);
        }

        let _ = group.bench_function(format!("{count}_residues"), |b| {
            b.iter(|| {
                let mut registry = SessionRegistry::new();
                let mut sink = RecordingSink::new();
                black_box(registry.create(
                    SessionSettings::default(),
                    Vec::new(),
                    &host,
                    &mut sink,
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, glyph_build_benchmark, session_enable_benchmark);
criterion_main!(benches);
