//! Change notifications consumed by sessions.
//!
//! The host publishes structure and residue changes; sessions subscribe per
//! channel and keep the returned [`SubscriptionToken`]s so they can release
//! exactly their own subscriptions on teardown.

use std::collections::BTreeMap;

use super::SessionId;
use crate::host::{MoleculeId, ResidueId};

/// Notification stream a session can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Molecule-level changes (coordinates, topology).
    Structure,
    /// Residue-level changes (deletion).
    Residue,
}

/// Why a change was published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeReason {
    /// The active coordinate set of the molecules changed.
    CoordinatesChanged,
    /// Atoms or bonds were added or removed.
    TopologyChanged,
    /// Residues were deleted.
    Deleted,
    /// Any other host-specific reason.
    Other(String),
}

/// One published change.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// Molecules were modified.
    Structure {
        /// Modified molecules.
        modified: Vec<MoleculeId>,
        /// Reason tags.
        reasons: Vec<ChangeReason>,
    },
    /// Residues were modified or deleted.
    Residue {
        /// Deleted residues.
        deleted: Vec<ResidueId>,
        /// Reason tags.
        reasons: Vec<ChangeReason>,
    },
}

impl ChangeEvent {
    /// Coordinate change of `modified`.
    #[must_use]
    pub fn coordinates_changed(modified: Vec<MoleculeId>) -> Self {
        Self::Structure {
            modified,
            reasons: vec![ChangeReason::CoordinatesChanged],
        }
    }

    /// Deletion of `deleted`.
    #[must_use]
    pub fn residues_deleted(deleted: Vec<ResidueId>) -> Self {
        Self::Residue {
            deleted,
            reasons: vec![ChangeReason::Deleted],
        }
    }

    /// Channel the event is published on.
    #[must_use]
    pub fn channel(&self) -> Channel {
        match self {
            Self::Structure { .. } => Channel::Structure,
            Self::Residue { .. } => Channel::Residue,
        }
    }

    /// Reason tags of the event.
    #[must_use]
    pub fn reasons(&self) -> &[ChangeReason] {
        match self {
            Self::Structure { reasons, .. } | Self::Residue { reasons, .. } => {
                reasons
            }
        }
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

/// Subscribe/unsubscribe side of the change-notification interface.
pub trait ChangeNotifier {
    /// Register `session` for events on `channel`.
    fn subscribe(
        &mut self,
        channel: Channel,
        session: SessionId,
    ) -> SubscriptionToken;

    /// Release a subscription. Returns `false` for unknown tokens.
    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool;
}

/// In-process [`ChangeNotifier`] routing events to subscribed sessions.
#[derive(Debug, Default)]
pub struct EventBus {
    next_token: u64,
    subscriptions: BTreeMap<SubscriptionToken, (Channel, SessionId)>,
}

impl EventBus {
    /// Empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions subscribed to `channel`, in subscription order, each listed
    /// once.
    #[must_use]
    pub fn subscribers(&self, channel: Channel) -> Vec<SessionId> {
        let mut sessions: Vec<SessionId> = Vec::new();
        for &(ch, session) in self.subscriptions.values() {
            if ch == channel && !sessions.contains(&session) {
                sessions.push(session);
            }
        }
        sessions
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether no subscription is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl ChangeNotifier for EventBus {
    fn subscribe(
        &mut self,
        channel: Channel,
        session: SessionId,
    ) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        let _ = self.subscriptions.insert(token, (channel, session));
        log::debug!("{session} subscribed to {channel:?} changes");
        token
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.subscriptions.remove(&token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_release_only_their_subscription() {
        let mut bus = EventBus::new();
        let a = bus.subscribe(Channel::Structure, SessionId(1));
        let _b = bus.subscribe(Channel::Structure, SessionId(2));
        assert_eq!(
            bus.subscribers(Channel::Structure),
            vec![SessionId(1), SessionId(2)]
        );
        assert!(bus.unsubscribe(a));
        assert!(!bus.unsubscribe(a));
        assert_eq!(bus.subscribers(Channel::Structure), vec![SessionId(2)]);
        assert!(bus.subscribers(Channel::Residue).is_empty());
    }

    #[test]
    fn event_channels() {
        let e = ChangeEvent::coordinates_changed(vec![MoleculeId(0)]);
        assert_eq!(e.channel(), Channel::Structure);
        assert_eq!(e.reasons(), &[ChangeReason::CoordinatesChanged]);
        let e = ChangeEvent::residues_deleted(vec![ResidueId(3)]);
        assert_eq!(e.channel(), Channel::Residue);
    }
}
