//! `snfg3d` command-line converter: structure JSON in, BILD out.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use snfg3d::command::{CommandOutcome, SnfgCommand};
use snfg3d::error::SnfgError;
use snfg3d::host::memory::MemoryStructure;
use snfg3d::options::{Options, RenderMethod};
use snfg3d::output::bild::BildScene;
use snfg3d::scene::SessionRegistry;

/// Render SNFG glyphs for the carbohydrates in a structure as BILD.
#[derive(Parser, Debug)]
#[command(name = "snfg3d", version, about, long_about = None)]
struct Args {
    /// Structure file (JSON).
    structure: PathBuf,

    /// Rendering method: icon, full, fullred or fullshown.
    #[arg(long, short = 'm')]
    method: Option<RenderMethod>,

    /// Base glyph size, overriding the method's default.
    #[arg(long, short = 's')]
    size: Option<f64>,

    /// TOML options preset.
    #[arg(long, short = 'o')]
    options: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), SnfgError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let host = load_structure(&args.structure)?;

    let mut registry = SessionRegistry::new();
    let mut scene = BildScene::new();
    let command = SnfgCommand::Create {
        method: args.method,
        size: args.size,
        molecules: Vec::new(),
    };
    if let CommandOutcome::Created(id) =
        command.execute(&mut registry, &options, &host, &mut scene)?
    {
        if let Some(session) = registry.get(id) {
            log::info!(
                "{id}: {} glyphs, {} problematic residues",
                session.glyph_count(),
                session.problematic_residues().len()
            );
        }
    }

    scene.write_to(io::stdout().lock()).map_err(SnfgError::Io)
}

fn load_structure(path: &Path) -> Result<MemoryStructure, SnfgError> {
    let json = std::fs::read_to_string(path).map_err(SnfgError::Io)?;
    MemoryStructure::from_json(&json)
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
