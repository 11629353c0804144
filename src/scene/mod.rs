//! Scene synchronization: sessions owning glyphs and connectors.
//!
//! A [`Session`] tracks a fixed set of molecules. Enabling it runs ring
//! detection, builds every glyph (shapes first, then connectors, since
//! connectors read glyph centers) and subscribes to change notifications.
//! Coordinate changes trigger a full redraw; residue deletions drop single
//! glyphs. All scene mutations go through a [`SceneSink`], keyed by
//! [`SceneKey`] so sessions never collide in the host scene.
//!
//! The [`SessionRegistry`] owns the live sessions and the [`EventBus`]
//! routing host changes to them.

pub mod events;
mod glyph;
mod registry;
mod session;
mod sink;

use std::fmt;

pub use events::{
    ChangeEvent, ChangeNotifier, ChangeReason, Channel, EventBus,
    SubscriptionToken,
};
pub use glyph::{Glyph, GlyphIdAllocator, BASE_GLYPH_ID};
pub use registry::SessionRegistry;
pub use session::{Session, SessionSettings, SessionState};
pub use sink::{subid, Batch, Label, SceneKey, SceneSink};

/// Registry-assigned session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u32);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session #{}", self.0)
    }
}
