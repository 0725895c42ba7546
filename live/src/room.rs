//! Room contract, local roster, and an in-process hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! The realtime service owns presence replication and fan-out. This crate
//! only needs two calls from it (`update_presence`, `broadcast`) and a stream
//! of [`ServerMessage`]s, which [`Roster`] folds into the list of other
//! participants. `LocalHub` plays the service's part inside one process so
//! several surfaces can be wired together in tests or offline.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use crate::engine::Action;
use crate::presence::{ConnectionId, Other, Presence, PresencePatch};
use crate::protocol::ServerMessage;
use crate::reaction::ReactionEvent;

/// The two outbound calls the surface makes on the realtime service.
///
/// Both are fire-and-forget: delivery, ordering, and retry belong to the
/// service.
pub trait Room {
    /// Merge a partial update into this participant's shared presence.
    fn update_presence(&self, patch: PresencePatch);
    /// Deliver an event to every other participant.
    fn broadcast(&self, event: ReactionEvent);
}

/// Drawing-surface history that context menu undo/redo forward to.
pub trait History {
    fn undo(&self);
    fn redo(&self);
}

/// Carry out engine actions against the room and the drawing history.
pub fn dispatch<R, H>(actions: Vec<Action>, room: &R, history: &H)
where
    R: Room + ?Sized,
    H: History + ?Sized,
{
    for action in actions {
        match action {
            Action::UpdatePresence(patch) => room.update_presence(patch),
            Action::Broadcast(event) => room.broadcast(event),
            Action::Undo => history.undo(),
            Action::Redo => history.redo(),
        }
    }
}

// =============================================================
// Roster
// =============================================================

/// This client's view of who else is in the room.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    self_id: Option<ConnectionId>,
    others: BTreeMap<ConnectionId, Presence>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn self_id(&self) -> Option<ConnectionId> {
        self.self_id
    }

    /// Other participants, ordered by connection id.
    #[must_use]
    pub fn others(&self) -> Vec<Other> {
        self.others
            .iter()
            .map(|(id, presence)| Other { connection_id: *id, presence: presence.clone() })
            .collect()
    }

    #[must_use]
    pub fn presence_of(&self, id: ConnectionId) -> Option<&Presence> {
        self.others.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.others.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.others.is_empty()
    }

    /// Forget everything, e.g. after the connection drops.
    pub fn reset(&mut self) {
        self.self_id = None;
        self.others.clear();
    }

    /// Fold one service message into the roster.
    ///
    /// Returns the reaction carried by an `Event` message so the caller can
    /// hand it to the surface; every other message returns `None`.
    pub fn apply(&mut self, message: ServerMessage) -> Option<ReactionEvent> {
        match message {
            ServerMessage::Welcome { connection_id } => {
                self.self_id = Some(connection_id);
                self.others.remove(&connection_id);
                None
            }
            ServerMessage::Roster { others } => {
                self.others = others
                    .into_iter()
                    .filter(|other| Some(other.connection_id) != self.self_id)
                    .map(|other| (other.connection_id, other.presence))
                    .collect();
                None
            }
            ServerMessage::Presence { connection_id, presence } => {
                if Some(connection_id) != self.self_id {
                    self.others.insert(connection_id, presence);
                }
                None
            }
            ServerMessage::Leave { connection_id } => {
                self.others.remove(&connection_id);
                None
            }
            ServerMessage::Event { connection_id, event } => {
                if Some(connection_id) == self.self_id {
                    log::warn!("dropping reaction echoed back to its sender");
                    return None;
                }
                Some(event)
            }
        }
    }
}

// =============================================================
// In-process hub
// =============================================================

#[derive(Debug, Default)]
struct Member {
    presence: Presence,
    inbox: VecDeque<ServerMessage>,
}

#[derive(Debug, Default)]
struct HubInner {
    next_id: u32,
    members: BTreeMap<ConnectionId, Member>,
}

impl HubInner {
    fn send_to_others(&mut self, from: ConnectionId, message: &ServerMessage) {
        for (id, member) in &mut self.members {
            if *id != from {
                member.inbox.push_back(message.clone());
            }
        }
    }
}

/// Single-threaded stand-in for the realtime service.
#[derive(Debug, Clone, Default)]
pub struct LocalHub {
    inner: Rc<RefCell<HubInner>>,
}

impl LocalHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the room. The new member receives `Welcome` then `Roster`; the
    /// existing members receive its (empty) presence.
    #[must_use]
    pub fn join(&self) -> LocalRoom {
        let mut inner = self.inner.borrow_mut();
        let id = ConnectionId(inner.next_id);
        inner.next_id += 1;

        let others = inner
            .members
            .iter()
            .map(|(other_id, member)| Other { connection_id: *other_id, presence: member.presence.clone() })
            .collect();
        let mut member = Member::default();
        member.inbox.push_back(ServerMessage::Welcome { connection_id: id });
        member.inbox.push_back(ServerMessage::Roster { others });
        inner.send_to_others(id, &ServerMessage::Presence { connection_id: id, presence: Presence::default() });
        inner.members.insert(id, member);

        LocalRoom { inner: Rc::clone(&self.inner), id }
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.inner.borrow().members.len()
    }
}

/// One participant's handle on a [`LocalHub`]. Dropping it leaves the room.
#[derive(Debug)]
pub struct LocalRoom {
    inner: Rc<RefCell<HubInner>>,
    id: ConnectionId,
}

impl LocalRoom {
    #[must_use]
    pub fn connection_id(&self) -> ConnectionId {
        self.id
    }

    /// Presence as the hub currently holds it for this member.
    #[must_use]
    pub fn presence(&self) -> Presence {
        self.inner
            .borrow()
            .members
            .get(&self.id)
            .map(|member| member.presence.clone())
            .unwrap_or_default()
    }

    /// Take every message queued for this member, oldest first.
    pub fn drain(&self) -> Vec<ServerMessage> {
        self.inner
            .borrow_mut()
            .members
            .get_mut(&self.id)
            .map(|member| member.inbox.drain(..).collect())
            .unwrap_or_default()
    }
}

impl Room for LocalRoom {
    fn update_presence(&self, patch: PresencePatch) {
        let mut inner = self.inner.borrow_mut();
        let Some(member) = inner.members.get_mut(&self.id) else {
            return;
        };
        member.presence.apply(&patch);
        let message = ServerMessage::Presence { connection_id: self.id, presence: member.presence.clone() };
        inner.send_to_others(self.id, &message);
    }

    fn broadcast(&self, event: ReactionEvent) {
        let message = ServerMessage::Event { connection_id: self.id, event };
        self.inner.borrow_mut().send_to_others(self.id, &message);
    }
}

impl Drop for LocalRoom {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.members.remove(&self.id).is_some() {
            inner.send_to_others(self.id, &ServerMessage::Leave { connection_id: self.id });
        }
    }
}
