//! In-memory roster state: the ordered collection of team members, the
//! single append mutation, and change notification for subscribed views.

use std::sync::Arc;

use shared::domain::{MemberDraft, MemberId, TeamMember};
use tracing::debug;

pub mod seed;

/// One immutable collection value. Cloning is cheap; an append replaces the
/// store's snapshot wholesale and never mutates a snapshot already handed
/// out.
pub type RosterSnapshot = Arc<Vec<TeamMember>>;

type Subscriber = Box<dyn FnMut(&RosterSnapshot)>;

/// Owner of the authoritative ordered member list and the id counter.
///
/// The store exposes exactly one mutation, [`RosterStore::append`]. Views
/// read through [`RosterStore::snapshot`] and may register a callback with
/// [`RosterStore::subscribe`] to hear about each replacement.
pub struct RosterStore {
    members: RosterSnapshot,
    next_member_id: i64,
    subscribers: Vec<Subscriber>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::with_seed([])
    }

    /// Store whose initial collection is the seed drafts appended in order,
    /// each receiving a freshly assigned id. The seed is injected rather
    /// than baked in so callers (and tests) can supply any roster.
    pub fn with_seed(seed: impl IntoIterator<Item = MemberDraft>) -> Self {
        let mut store = Self {
            members: Arc::new(Vec::new()),
            next_member_id: 1,
            subscribers: Vec::new(),
        };
        for draft in seed {
            store.append(draft);
        }
        store
    }

    /// Appends the draft as a new member at the end of the collection.
    ///
    /// Every field is accepted as-is, empty strings included; no validation
    /// happens here or anywhere downstream. The previous snapshot stays
    /// untouched and a new collection value replaces it, after which each
    /// subscriber is invoked with the new snapshot.
    pub fn append(&mut self, draft: MemberDraft) {
        let id = MemberId(self.next_member_id);
        self.next_member_id += 1;

        let MemberDraft { name, email, role } = draft;
        let mut next = Vec::with_capacity(self.members.len() + 1);
        next.extend(self.members.iter().cloned());
        next.push(TeamMember {
            id,
            name,
            email,
            role,
        });
        self.members = Arc::new(next);

        debug!(
            member_id = id.0,
            roster_len = self.members.len(),
            "appended roster member"
        );

        let snapshot = Arc::clone(&self.members);
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }

    /// The current collection value.
    pub fn snapshot(&self) -> RosterSnapshot {
        Arc::clone(&self.members)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Registers a callback invoked with the new snapshot after every
    /// append. Callbacks run synchronously on the caller's thread, in
    /// registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&RosterSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
