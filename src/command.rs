//! The `snfg` command surface.
//!
//! Commands are plain text of the form
//!
//! ```text
//! snfg [method] [size=<f>] [molecules=<id,id,...>]
//! snfg undo
//! ```
//!
//! where `method` may also be written `method=<name>`. Parsing validates the
//! method name, so an unsupported method fails before any session exists.

use std::str::FromStr;

use crate::error::SnfgError;
use crate::host::{MoleculeId, StructureHost};
use crate::options::{Options, RenderMethod};
use crate::scene::{SceneSink, SessionId, SessionRegistry};

/// Parsed `snfg` command.
#[derive(Debug, Clone, PartialEq)]
pub enum SnfgCommand {
    /// Create a session over `molecules` (empty means all).
    Create {
        /// Rendering preset; `None` uses the options' default method.
        method: Option<RenderMethod>,
        /// Base size override.
        size: Option<f64>,
        /// Molecules to track.
        molecules: Vec<MoleculeId>,
    },
    /// Disable every session.
    Undo,
}

/// Result of running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A session was created and enabled.
    Created(SessionId),
    /// This many sessions were disabled.
    Undone(usize),
}

impl SnfgCommand {
    /// Parse a command line. The leading `snfg` word is optional.
    pub fn parse(line: &str) -> Result<Self, SnfgError> {
        let mut words: Vec<&str> = line.split_whitespace().collect();
        if words.first() == Some(&"snfg") {
            let _ = words.remove(0);
        }
        if words.contains(&"undo") {
            return if words.len() == 1 {
                Ok(Self::Undo)
            } else {
                Err(SnfgError::InvalidArgument(
                    "'undo' takes no other arguments".to_owned(),
                ))
            };
        }

        let mut method = None;
        let mut size = None;
        let mut molecules = Vec::new();
        for word in words {
            match word.split_once('=') {
                Some(("method", value)) => {
                    method = Some(RenderMethod::from_str(value)?);
                }
                Some(("size", value)) => size = Some(parse_size(value)?),
                Some(("molecules", value)) => {
                    molecules = parse_molecules(value)?;
                }
                Some((key, _)) => {
                    return Err(SnfgError::InvalidArgument(format!(
                        "unknown keyword '{key}'"
                    )));
                }
                None if method.is_none() => {
                    method = Some(RenderMethod::from_str(word)?);
                }
                None => {
                    return Err(SnfgError::InvalidArgument(format!(
                        "unexpected '{word}'"
                    )));
                }
            }
        }
        Ok(Self::Create {
            method,
            size,
            molecules,
        })
    }

    /// Run the command against `registry`.
    pub fn execute(
        &self,
        registry: &mut SessionRegistry,
        options: &Options,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
    ) -> Result<CommandOutcome, SnfgError> {
        match self {
            Self::Create {
                method,
                size,
                molecules,
            } => {
                let method = method.unwrap_or(options.method);
                let settings = method.settings(options, *size);
                log::info!("snfg {method}: base size {}", settings.base_size);
                let id =
                    registry.create(settings, molecules.clone(), host, sink)?;
                Ok(CommandOutcome::Created(id))
            }
            Self::Undo => Ok(CommandOutcome::Undone(registry.disable_all(sink))),
        }
    }
}

impl FromStr for SnfgCommand {
    type Err = SnfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_size(value: &str) -> Result<f64, SnfgError> {
    match value.parse::<f64>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(SnfgError::InvalidArgument(format!(
            "size must be a positive number, got '{value}'"
        ))),
    }
}

fn parse_molecules(value: &str) -> Result<Vec<MoleculeId>, SnfgError> {
    value
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim_start_matches('#').parse::<u32>().map(MoleculeId).map_err(
                |_| SnfgError::InvalidArgument(format!("bad molecule '{s}'")),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::host::memory::MemoryStructure;
    use crate::output::RecordingSink;

    #[test]
    fn bare_method_and_size() {
        let cmd = SnfgCommand::parse("snfg fullred size=3").unwrap();
        assert_eq!(
            cmd,
            SnfgCommand::Create {
                method: Some(RenderMethod::Fullred),
                size: Some(3.0),
                molecules: Vec::new(),
            }
        );
    }

    #[test]
    fn keyword_method_and_molecules() {
        let cmd: SnfgCommand =
            "method=icon molecules=#0,2".parse().unwrap();
        assert_eq!(
            cmd,
            SnfgCommand::Create {
                method: Some(RenderMethod::Icon),
                size: None,
                molecules: vec![MoleculeId(0), MoleculeId(2)],
            }
        );
    }

    #[test]
    fn empty_command_uses_defaults() {
        assert_eq!(
            SnfgCommand::parse("snfg").unwrap(),
            SnfgCommand::Create {
                method: None,
                size: None,
                molecules: Vec::new(),
            }
        );
    }

    #[test]
    fn unknown_method_fails_fast() {
        let err = SnfgCommand::parse("snfg method=cartoon").unwrap_err();
        assert!(matches!(err, SnfgError::UnsupportedMethod(m) if m == "cartoon"));
    }

    #[test]
    fn malformed_arguments() {
        assert!(SnfgCommand::parse("snfg size=-1").is_err());
        assert!(SnfgCommand::parse("snfg size=big").is_err());
        assert!(SnfgCommand::parse("snfg color=red").is_err());
        assert!(SnfgCommand::parse("snfg full icon").is_err());
        assert!(SnfgCommand::parse("snfg undo full").is_err());
        assert!(SnfgCommand::parse("snfg full undo").is_err());
        assert!(SnfgCommand::parse("snfg molecules=a").is_err());
    }

    #[test]
    fn create_then_undo() {
        let mut host = MemoryStructure::new();
        let mol = host.add_molecule("glycan");
        let _ = host.add_ring_residue(
            mol,
            "MAN",
            &["C1", "C2", "C3", "C4", "C5", "O5"],
            DVec3::ZERO,
        );
        let mut registry = SessionRegistry::new();
        let mut sink = RecordingSink::new();
        let options = Options::default();

        let outcome = SnfgCommand::parse("snfg full")
            .unwrap()
            .execute(&mut registry, &options, &host, &mut sink)
            .unwrap();
        let CommandOutcome::Created(id) = outcome else {
            panic!("expected a session");
        };
        let session = registry.get(id).unwrap();
        assert_eq!(session.settings().base_size, 4.0);
        assert!(session.settings().hide_residue);
        assert!(!sink.is_empty());

        let outcome = SnfgCommand::Undo
            .execute(&mut registry, &options, &host, &mut sink)
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Undone(1));
        assert!(registry.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn default_method_comes_from_options() {
        let host = MemoryStructure::new();
        let mut registry = SessionRegistry::new();
        let mut sink = RecordingSink::new();
        let options = Options {
            method: RenderMethod::Fullshown,
            ..Options::default()
        };
        let outcome = SnfgCommand::parse("snfg size=2.5")
            .unwrap()
            .execute(&mut registry, &options, &host, &mut sink)
            .unwrap();
        let CommandOutcome::Created(id) = outcome else {
            panic!("expected a session");
        };
        let settings = registry.get(id).unwrap().settings();
        assert_eq!(settings.base_size, 2.5);
        assert!(!settings.hide_residue);
        assert_eq!(settings.sphere_redfac, 0.25);
    }
}
